use cubit_blocks::{BLOCK_SIZE, BlockProperties};
use cubit_geom::{Aabb, Vec3, Vec3i};
use cubit_mesh::{BlockMesh, Face, MeshError, synthesize};

/// One occupied grid cell. Its identity is its coordinate; the mesh is derived from
/// the properties and rebuilt whenever they change.
#[derive(Debug)]
pub struct Block {
    coord: Vec3i,
    props: BlockProperties,
    faces: Vec<Face>,
    mesh: BlockMesh,
}

impl Block {
    pub fn new(coord: Vec3i, props: BlockProperties) -> Result<Self, MeshError> {
        let faces = synthesize(&props)?;
        let mesh = BlockMesh::from_faces(&faces);
        Ok(Self {
            coord,
            props,
            faces,
            mesh,
        })
    }

    #[inline]
    pub fn coord(&self) -> Vec3i {
        self.coord
    }

    #[inline]
    pub fn properties(&self) -> BlockProperties {
        self.props
    }

    /// Block-local quads from the last synthesis.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn mesh(&self) -> &BlockMesh {
        &self.mesh
    }

    /// World-space offset of the block-local origin.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.coord.as_vec3() * BLOCK_SIZE
    }

    /// World-space box of the whole cell, independent of shape.
    pub fn cell_bounds(&self) -> Aabb {
        let min = self.translation();
        Aabb::new(min, min + Vec3::splat(BLOCK_SIZE))
    }

    /// Replaces the properties and rebuilds the mesh. On error the block is unchanged.
    pub fn set_properties(&mut self, props: BlockProperties) -> Result<(), MeshError> {
        if props == self.props {
            return Ok(());
        }
        let faces = synthesize(&props)?;
        self.mesh.clear_keep_capacity();
        self.mesh.reserve_quads(faces.len());
        for face in &faces {
            self.mesh.push_face(face);
        }
        self.faces = faces;
        self.props = props;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubit_blocks::{Orientation, ShapeType, Sides};

    #[test]
    fn set_properties_rebuilds_mesh() {
        let mut b = Block::new(Vec3i::new(1, 2, 3), BlockProperties::cube()).expect("block");
        assert_eq!(b.mesh().triangle_count(), 12);
        b.set_properties(BlockProperties::cube().with_sides(Sides::TOP))
            .expect("rebuild");
        assert_eq!(b.faces().len(), 1);
        assert_eq!(b.mesh().triangle_count(), 2);
        assert_eq!(b.translation(), Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn failed_rebuild_keeps_previous_state() {
        let mut b = Block::new(Vec3i::ZERO, BlockProperties::cube()).expect("block");
        let bad = BlockProperties::cube()
            .with_shape(ShapeType::SlopeQuarter)
            .with_orientation(Orientation::East);
        assert!(b.set_properties(bad).is_err());
        assert_eq!(b.properties(), BlockProperties::cube());
        assert_eq!(b.faces().len(), 6);
    }
}
