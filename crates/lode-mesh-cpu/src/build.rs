use lode_blocks::{RenderPass, TileId, TileRegistry, TileType, Transparency};
use lode_chunk::{Chunk, RAW, TILE};
use lode_geom::{Direction, IVec3, Vec3};
use lode_world::Area;

use crate::mesh_build::MeshBuild;

/// The texture atlas is 16x16 tiles.
const ATLAS_TILES: f32 = 16.0;
const UV_UNIT: f32 = 1.0 / ATLAS_TILES;

/// Index/vertex sub-range of one render pass within a chunk's merged
/// buffers. A pass with `num_indices == 0` must not be submitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassRange {
    pub num_indices: usize,
    pub indices_start: usize,
    pub num_vertices: usize,
    pub vertices_start: usize,
}

/// Render-ready geometry of one chunk: merged buffers plus per-pass
/// sub-ranges, so a single buffer pair serves one draw per pass.
#[derive(Clone, Debug)]
pub struct ChunkMeshCpu {
    pub offset: IVec3,
    pub build: MeshBuild,
    pub passes: [PassRange; RenderPass::COUNT],
}

impl ChunkMeshCpu {
    #[inline]
    pub fn pass(&self, pass: RenderPass) -> PassRange {
        self.passes[pass.index()]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.build.is_empty()
    }
}

/// World translation of a chunk's mesh.
#[inline]
pub fn chunk_translation(offset: IVec3) -> Vec3 {
    (offset * Chunk::SIZE).to_vec3()
}

fn face_visible(ty: &TileType, neighbor: TileId, reg: &TileRegistry) -> bool {
    if neighbor == 0 {
        return true;
    }
    match reg.get(neighbor) {
        None => true,
        Some(n) => {
            n.transparency != Transparency::Opaque
                && (n.transparency != Transparency::Merged || neighbor != ty.id)
        }
    }
}

fn emit_tile(
    area: &Area,
    chunk: &Chunk,
    reg: &TileRegistry,
    ty: &TileType,
    pos: IVec3,
    build: &mut MeshBuild,
) {
    let shininess = reg
        .materials
        .get(ty.material)
        .map(|m| m.shininess)
        .unwrap_or(0);
    let material = [0.0, 0.0, 0.0, shininess as f32 / 255.0];

    for dir in Direction::ALL {
        let raw = area.or_area(chunk, RAW, pos + dir.delta());
        let neighbor = TILE.decode(raw) as TileId;
        if !face_visible(ty, neighbor, reg) {
            continue;
        }
        let off = ty.texture_offset(dir);
        // flip v so atlas rows index from the top
        let uv_offset = (
            off[0] as f32 * UV_UNIT,
            (ATLAS_TILES - off[1] as f32 - 1.0) * UV_UNIT,
        );
        build.add_face(dir, pos.to_vec3(), uv_offset, (UV_UNIT, UV_UNIT), material);
    }
}

/// Rebuilds the full mesh of `chunk`, reading neighbor cells through
/// the area so boundary faces cull correctly across chunks.
pub fn build_chunk_mesh(area: &Area, chunk: &Chunk, reg: &TileRegistry) -> ChunkMeshCpu {
    let mut passes: [MeshBuild; RenderPass::COUNT] = Default::default();

    for x in 0..Chunk::SIZE.x {
        for y in 0..Chunk::SIZE.y {
            for z in 0..Chunk::SIZE.z {
                let pos = IVec3::new(x, y, z);
                let id = chunk.tile(pos);
                if id == 0 {
                    continue;
                }
                let Some(ty) = reg.get(id) else { continue };
                emit_tile(area, chunk, reg, ty, pos, &mut passes[ty.render_pass.index()]);
            }
        }
    }

    let mut build = MeshBuild::default();
    let mut ranges = [PassRange::default(); RenderPass::COUNT];
    let mut num_vertices = 0;
    let mut num_indices = 0;
    for (i, pass) in passes.iter().enumerate() {
        if pass.is_empty() {
            continue;
        }
        ranges[i] = PassRange {
            num_indices: pass.index_count(),
            indices_start: num_indices,
            num_vertices: pass.vertex_count(),
            vertices_start: num_vertices,
        };
        build.append(pass);
        num_vertices += pass.vertex_count();
        num_indices += pass.index_count();
    }

    ChunkMeshCpu {
        offset: chunk.offset,
        build,
        passes: ranges,
    }
}
