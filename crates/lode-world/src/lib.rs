//! Area streaming, deterministic noise, and terrain synthesis.
#![forbid(unsafe_code)]

pub mod area;
pub mod budget;
pub mod noise;
pub mod worldgen;

pub use area::{Area, GeneratorFn};
pub use budget::Budget;
pub use noise::{Combined, Octave};
pub use worldgen::WATER_LEVEL;
