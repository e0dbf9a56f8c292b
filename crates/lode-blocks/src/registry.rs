use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use lode_geom::{Aabb, Direction, IVec3};

use crate::config::{TileDef, TilesConfig};
use crate::material::MaterialCatalog;
use crate::types::{MAX_TILES, MaterialId, RenderPass, TileId, Transparency};

/// Compiled per-face atlas offsets, in 16ths of the atlas.
#[derive(Clone, Copy, Debug, Default)]
pub struct FaceTextures {
    pub top: [i32; 2],
    pub bottom: [i32; 2],
    pub side: [i32; 2],
}

/// One registered tile descriptor.
#[derive(Clone, Debug)]
pub struct TileType {
    pub id: TileId,
    pub name: String,
    pub solid: bool,
    pub render_pass: RenderPass,
    pub transparency: Transparency,
    pub material: MaterialId,
    pub textures: FaceTextures,
}

impl TileType {
    fn placeholder(id: TileId) -> Self {
        TileType {
            id,
            name: String::new(),
            solid: false,
            render_pass: RenderPass::Default,
            transparency: Transparency::Transparent,
            material: MaterialId(0),
            textures: FaceTextures::default(),
        }
    }

    /// Atlas offset of the face pointing in `dir`.
    #[inline]
    pub fn texture_offset(&self, dir: Direction) -> [i32; 2] {
        match dir {
            Direction::Top => self.textures.top,
            Direction::Bottom => self.textures.bottom,
            _ => self.textures.side,
        }
    }

    /// Collision box of this tile placed at block position `pos`.
    #[inline]
    pub fn aabb(&self, pos: IVec3) -> Aabb {
        Aabb::unit().translate(pos.to_vec3())
    }
}

#[derive(Default, Clone, Debug)]
pub struct TileRegistry {
    pub materials: MaterialCatalog,
    pub tiles: Vec<TileType>,
    pub by_name: HashMap<String, TileId>,
}

impl TileRegistry {
    #[inline]
    pub fn get(&self, id: TileId) -> Option<&TileType> {
        self.tiles.get(id as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<TileId> {
        self.by_name.get(name).copied()
    }

    /// The registry compiled from the tables shipped under `assets/`.
    pub fn builtin() -> Self {
        Self::from_toml_strs(
            include_str!("../../../assets/materials.toml"),
            include_str!("../../../assets/tiles.toml"),
        )
        .expect("shipped tile tables parse")
    }

    pub fn load_from_paths(
        materials_path: impl AsRef<Path>,
        tiles_path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn Error>> {
        let materials = MaterialCatalog::from_path(materials_path)?;
        let tiles_toml = fs::read_to_string(tiles_path)?;
        let cfg: TilesConfig = toml::from_str(&tiles_toml)?;
        Self::from_configs(materials, cfg)
    }

    pub fn from_toml_strs(materials: &str, tiles: &str) -> Result<Self, Box<dyn Error>> {
        let materials = MaterialCatalog::from_toml_str(materials)?;
        let cfg: TilesConfig = toml::from_str(tiles)?;
        Self::from_configs(materials, cfg)
    }

    pub fn from_configs(
        materials: MaterialCatalog,
        cfg: TilesConfig,
    ) -> Result<Self, Box<dyn Error>> {
        let mut reg = TileRegistry {
            materials,
            tiles: Vec::new(),
            by_name: HashMap::new(),
        };
        for def in cfg.tiles.into_iter() {
            let ty = compile_tile(&reg.materials, def, reg.tiles.len())?;
            let ix = ty.id as usize;
            if let Some(existing) = reg.tiles.get(ix) {
                if !existing.name.is_empty() {
                    return Err(format!(
                        "tile with id {} already exists ({:?})",
                        ty.id, existing.name
                    )
                    .into());
                }
            }
            if reg.tiles.len() <= ix {
                let mut next = reg.tiles.len() as u16;
                reg.tiles.resize_with(ix + 1, || {
                    let p = TileType::placeholder(next);
                    next += 1;
                    p
                });
            }
            reg.by_name.insert(ty.name.clone(), ty.id);
            reg.tiles[ix] = ty;
        }
        log::debug!("compiled tile registry: {} ids", reg.tiles.len());
        Ok(reg)
    }
}

fn compile_tile(
    materials: &MaterialCatalog,
    def: TileDef,
    next_id: usize,
) -> Result<TileType, Box<dyn Error>> {
    let id = def.id.map(usize::from).unwrap_or(next_id);
    if id >= MAX_TILES {
        return Err(format!("tile {:?} id {} exceeds MAX_TILES", def.name, id).into());
    }
    let render_pass = match def.render_pass.as_deref() {
        None | Some("default") => RenderPass::Default,
        Some("water") => RenderPass::Water,
        Some(other) => {
            return Err(format!("tile {:?}: unknown render pass {:?}", def.name, other).into());
        }
    };
    let transparency = match def.transparency.as_deref() {
        None | Some("opaque") => Transparency::Opaque,
        Some("transparent") => Transparency::Transparent,
        Some("merged") => Transparency::Merged,
        Some(other) => {
            return Err(format!("tile {:?}: unknown transparency {:?}", def.name, other).into());
        }
    };
    let material_key = def.material.as_deref().unwrap_or("default");
    let material = materials
        .get_id(material_key)
        .ok_or_else(|| format!("tile {:?}: unknown material {:?}", def.name, material_key))?;
    let tex = def.textures.unwrap_or_default();
    let all = tex.all.unwrap_or([0, 0]);
    Ok(TileType {
        id: id as TileId,
        name: def.name,
        solid: def.solid.unwrap_or(true),
        render_pass,
        transparency,
        material,
        textures: FaceTextures {
            top: tex.top.unwrap_or(all),
            bottom: tex.bottom.unwrap_or(all),
            side: tex.side.unwrap_or(all),
        },
    })
}
