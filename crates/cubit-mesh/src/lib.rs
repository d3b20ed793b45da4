//! Block face synthesis: shape algorithms, orientation and mesh buffers (renderer-agnostic).
#![forbid(unsafe_code)]

mod constants;
mod face;
mod mesh_build;
mod rotate;
mod shapes;

pub use face::{Face, QUAD_INDICES, Vertex, quad_normal};
pub use mesh_build::BlockMesh;
pub use rotate::{canonical_side, physical_side, remap_sides, rotate_face};

use cubit_blocks::{BlockProperties, ShapeType};
use shapes::PillarAnchor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("no face synthesis algorithm for shape {0:?}")]
    UnsupportedShape(ShapeType),
}

/// Builds the visible quads of one block in block-local space (`[0, S]^3`).
///
/// The visible side set is interpreted in the physical frame: hiding `Left` hides the
/// `-x` face whatever the block's orientation.
pub fn synthesize(props: &BlockProperties) -> Result<Vec<Face>, MeshError> {
    let orientation = props.orientation();
    let visible = remap_sides(props.sides(), orientation);
    let mut faces = Vec::with_capacity(6);
    match props.shape() {
        ShapeType::Cube => shapes::emit_cube(visible, &mut faces),
        ShapeType::PillarCorner => shapes::emit_pillar(PillarAnchor::Corner, visible, &mut faces),
        ShapeType::PillarCenter => shapes::emit_pillar(PillarAnchor::Center, visible, &mut faces),
        ShapeType::SlopeHalf => shapes::emit_slope_half(props, visible, &mut faces),
        ShapeType::SlopeQuarter => return Err(MeshError::UnsupportedShape(props.shape())),
    }
    for face in &mut faces {
        *face = rotate_face(face, orientation);
    }
    log::trace!(
        target: "mesh",
        "synthesized {} faces for {:?} facing {:?}",
        faces.len(),
        props.shape(),
        orientation
    );
    Ok(faces)
}

/// [`synthesize`] followed by [`BlockMesh::from_faces`].
pub fn build_block_mesh(props: &BlockProperties) -> Result<BlockMesh, MeshError> {
    Ok(BlockMesh::from_faces(&synthesize(props)?))
}
