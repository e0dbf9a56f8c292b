//! CPU chunk meshing: per-face culling into per-pass buffer ranges.
#![forbid(unsafe_code)]

mod build;
mod cache;
mod cube;
mod mesh_build;

pub use build::{ChunkMeshCpu, PassRange, build_chunk_mesh, chunk_translation};
pub use cache::{ChunkMesh, MeshCache};
pub use mesh_build::MeshBuild;
