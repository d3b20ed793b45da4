use cubit_blocks::Side;
use cubit_geom::{Vec2, Vec3};

/// Triangle list shared by every quad: `(v0, v3, v1)` and `(v3, v2, v1)`.
pub const QUAD_INDICES: [u16; 6] = [0, 3, 1, 3, 2, 1];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

/// One textured quad in block-local space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Face {
    /// Physical side this quad faces after orientation is applied.
    pub side: Side,
    pub vertices: [Vertex; 4],
}

impl Face {
    pub fn new(side: Side, corners: [Vec3; 4], normal: Vec3, uvs: [(f32, f32); 4]) -> Self {
        let vertices = core::array::from_fn(|i| Vertex {
            position: corners[i],
            normal,
            uv: Vec2::new(uvs[i].0, uvs[i].1),
        });
        Self { side, vertices }
    }

    /// Like [`Face::new`] but derives the normal from the quad's own edges.
    pub fn with_computed_normal(side: Side, corners: [Vec3; 4], uvs: [(f32, f32); 4]) -> Self {
        Self::new(side, corners, quad_normal(&corners), uvs)
    }

    #[inline]
    pub fn indices(&self) -> [u16; 6] {
        QUAD_INDICES
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.vertices[0].normal
    }

    pub fn positions(&self) -> [Vec3; 4] {
        self.vertices.map(|v| v.position)
    }
}

/// Outward unit normal of a planar quad wound like the cube faces: `(v0 - v1) x (v2 - v1)`.
pub fn quad_normal(corners: &[Vec3; 4]) -> Vec3 {
    let [v0, v1, v2, _] = *corners;
    (v0 - v1).cross(v2 - v1).normalized()
}
