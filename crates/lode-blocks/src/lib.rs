//! Tile descriptors, materials, and the registry compiled from TOML.
#![forbid(unsafe_code)]

pub mod config;
pub mod material;
pub mod registry;
pub mod types;

pub use material::{Material, MaterialCatalog};
pub use registry::{TileRegistry, TileType};
pub use types::{MAX_TILES, MaterialId, RenderPass, TileId, Transparency};
