use cubit_geom::{Ray, Vec3, Vec3i};
use cubit_world::Grid;

/// Which of several hits a pick keeps, by distance from the eye.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickOrder {
    #[default]
    Nearest,
    /// Reaches through near geometry (shift held).
    Farthest,
}

impl PickOrder {
    #[inline]
    pub fn from_shift(shift: bool) -> Self {
        if shift {
            PickOrder::Farthest
        } else {
            PickOrder::Nearest
        }
    }

    /// Whether `candidate` beats `best` under this order. Ties keep `best`.
    #[inline]
    pub fn prefers(self, candidate: f32, best: f32) -> bool {
        match self {
            PickOrder::Nearest => candidate < best,
            PickOrder::Farthest => candidate > best,
        }
    }
}

/// Ray picking against the occupied cells of a grid.
#[derive(Debug, Clone, Copy)]
pub struct BlockCaster {
    pub epsilon: f32,
}

impl BlockCaster {
    pub fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    /// Occupied cell hit by `ray` whose box center is nearest to (or farthest from) `eye`.
    /// Cells are scanned in slot order, so ties go to the lower slot index.
    pub fn cast(&self, ray: &Ray, grid: &Grid, eye: Vec3, order: PickOrder) -> Option<Vec3i> {
        let mut best: Option<(Vec3i, f32)> = None;
        for block in grid.iter() {
            let bounds = block.cell_bounds();
            if ray.intersect_aabb(&bounds, self.epsilon).is_none() {
                continue;
            }
            let d2 = bounds.center().distance_squared(eye);
            if best.is_none_or(|(_, b)| order.prefers(d2, b)) {
                best = Some((block.coord(), d2));
            }
        }
        best.map(|(c, _)| c)
    }
}
