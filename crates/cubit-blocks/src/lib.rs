//! Block shape model: shape types, orientation, visible sides and presets.
#![forbid(unsafe_code)]

pub mod palette;
pub mod types;

pub use palette::Palette;
pub use types::{BLOCK_SIZE, BlockProperties, Orientation, ShapeType, Side, Sides, Turn};
