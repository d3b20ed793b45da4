use cubit_geom::Vec3i;
use cubit_mesh::MeshError;

use crate::grid::GridDims;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("coordinate {coord} is outside the {dims} grid")]
pub struct BoundsError {
    pub coord: Vec3i,
    pub dims: GridDims,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    #[error("block for {block} cannot be stored in slot {slot}")]
    CoordinateMismatch { slot: Vec3i, block: Vec3i },
    #[error("mesh synthesis failed for block at {coord}")]
    Mesh {
        coord: Vec3i,
        #[source]
        source: MeshError,
    },
}
