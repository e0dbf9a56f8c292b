use hashbrown::HashMap;

use lode_blocks::{RenderPass, TileRegistry};
use lode_geom::IVec3;
use lode_world::{Area, Budget};

use crate::build::{PassRange, build_chunk_mesh};
use crate::mesh_build::MeshBuild;

/// Cached mesh of one loaded chunk.
#[derive(Default, Clone, Debug)]
pub struct ChunkMesh {
    /// Chunk version at the last rebuild; `None` until first meshed.
    /// Rendering with `None` draws nothing (there is no mesh yet).
    pub mesh_version: Option<u64>,
    pub build: MeshBuild,
    pub passes: [PassRange; RenderPass::COUNT],
}

impl ChunkMesh {
    #[inline]
    pub fn pass(&self, pass: RenderPass) -> PassRange {
        self.passes[pass.index()]
    }
}

/// Renderer-side mesh store, one entry per loaded chunk. Entries live
/// exactly as long as the chunk they derive from.
#[derive(Default)]
pub struct MeshCache {
    meshes: HashMap<IVec3, ChunkMesh>,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, offset: IVec3) -> Option<&ChunkMesh> {
        self.meshes.get(&offset)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Syncs the cache with the area: drops meshes whose chunk was
    /// unloaded, then rebuilds stale meshes while the per-frame budget
    /// admits. A rebuild is all-or-nothing; chunks skipped by the
    /// budget keep their previous mesh until a later frame.
    pub fn update(&mut self, area: &Area, reg: &TileRegistry, budget: &mut Budget) {
        self.meshes.retain(|offset, _| area.contains_chunk(*offset));

        for (offset, chunk) in area.chunks() {
            let entry = self.meshes.entry(*offset).or_default();
            if entry.mesh_version == Some(chunk.version) {
                continue;
            }
            if !budget.admit() {
                continue;
            }
            let cpu = build_chunk_mesh(area, chunk, reg);
            log::trace!(
                "meshed chunk {:?}: {} vertices, {} indices",
                offset,
                cpu.build.vertex_count(),
                cpu.build.index_count()
            );
            entry.build = cpu.build;
            entry.passes = cpu.passes;
            entry.mesh_version = Some(chunk.version);
        }
    }
}
