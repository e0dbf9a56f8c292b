/// Registered tile identifier; 0 is air and always means "no tile".
pub type TileId = u16;

/// Upper bound on distinct tile ids a registry will accept.
pub const MAX_TILES: usize = 16384;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u16);

/// Geometry bucket a tile's faces are drawn in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderPass {
    #[default]
    Default = 0,
    Water = 1,
}

impl RenderPass {
    pub const COUNT: usize = 2;

    pub const ALL: [RenderPass; 2] = [RenderPass::Default, RenderPass::Water];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Controls whether a face is emitted against a given neighbor.
///
/// `Merged` tiles are see-through only toward a *different* tile id;
/// two adjacent merged tiles of the same id suppress the face between
/// them (water surfaces stay internal-face free).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Transparency {
    #[default]
    Opaque,
    Transparent,
    Merged,
}
