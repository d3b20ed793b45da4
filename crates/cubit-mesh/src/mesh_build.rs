use cubit_geom::{Aabb, Vec3};

use crate::face::Face;

/// Flattened triangle buffers for one block, ready for upload.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct BlockMesh {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u16>,
}

impl BlockMesh {
    pub fn from_faces(faces: &[Face]) -> Self {
        let mut mesh = BlockMesh::default();
        mesh.reserve_quads(faces.len());
        for face in faces {
            mesh.push_face(face);
        }
        mesh
    }

    /// Clears all arrays but retains capacity for reuse.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.uv.clear();
        self.idx.clear();
    }

    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        self.uv.reserve(n_quads * 4 * 2);
        self.idx.reserve(n_quads * 6);
    }

    pub fn push_face(&mut self, face: &Face) {
        let base = self.vertex_count() as u16;
        for v in &face.vertices {
            self.pos.extend_from_slice(&[v.position.x, v.position.y, v.position.z]);
            self.norm.extend_from_slice(&[v.normal.x, v.normal.y, v.normal.z]);
            self.uv.extend_from_slice(&[v.uv.x, v.uv.y]);
        }
        self.idx.extend(face.indices().iter().map(|i| base + i));
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    /// Tight bounds of all vertex positions, `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Aabb> {
        let mut pts = self
            .pos
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0], p[1], p[2]));
        let first = pts.next()?;
        Some(pts.fold(Aabb::new(first, first), |b, p| {
            Aabb::new(b.min.min(p), b.max.max(p))
        }))
    }
}
