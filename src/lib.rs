//! lode: a streaming, mutable voxel-world core.
//!
//! Chunks store bit-packed cells and version counters; the [`world`]
//! area streams them around a moving center and synthesizes terrain;
//! [`mesh`] derives per-pass geometry buffers when versions advance;
//! [`raycast`] and [`collide`] read the same world-space block field
//! for targeting and movement.
#![forbid(unsafe_code)]

pub mod collide;
pub mod raycast;

pub use lode_blocks as blocks;
pub use lode_chunk as chunk;
pub use lode_geom as geom;
pub use lode_mesh_cpu as mesh;
pub use lode_world as world;

pub use collide::{Resolution, resolve};
pub use raycast::{RayHit, intersect};
