//! Dense block grid: storage, bounds validation and per-block cached meshes.
#![forbid(unsafe_code)]

mod block;
mod error;
mod grid;

pub use block::Block;
pub use error::{BoundsError, GridError};
pub use grid::{Grid, GridDims};
