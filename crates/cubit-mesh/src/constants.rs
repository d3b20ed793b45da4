//! Unit-cube corners and axis normals, scaled by the block edge length.
//!
//! Naming is `<front|back>_<bottom|top>_<left|right>`: front is `+z`, top is `+y`,
//! right is `+x`. The back-bottom-left corner sits at the block-local origin.

use cubit_blocks::BLOCK_SIZE as S;
use cubit_geom::Vec3;

pub(crate) const FRONT_BOTTOM_LEFT: Vec3 = Vec3::new(0.0, 0.0, S);
pub(crate) const FRONT_BOTTOM_RIGHT: Vec3 = Vec3::new(S, 0.0, S);
pub(crate) const BACK_BOTTOM_LEFT: Vec3 = Vec3::new(0.0, 0.0, 0.0);
pub(crate) const BACK_BOTTOM_RIGHT: Vec3 = Vec3::new(S, 0.0, 0.0);
pub(crate) const FRONT_TOP_LEFT: Vec3 = Vec3::new(0.0, S, S);
pub(crate) const FRONT_TOP_RIGHT: Vec3 = Vec3::new(S, S, S);
pub(crate) const BACK_TOP_LEFT: Vec3 = Vec3::new(0.0, S, 0.0);
pub(crate) const BACK_TOP_RIGHT: Vec3 = Vec3::new(S, S, 0.0);

pub(crate) const NORMAL_LEFT: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
pub(crate) const NORMAL_RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub(crate) const NORMAL_BACK: Vec3 = Vec3::new(0.0, 0.0, -1.0);
pub(crate) const NORMAL_FRONT: Vec3 = Vec3::new(0.0, 0.0, 1.0);
pub(crate) const NORMAL_TOP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub(crate) const NORMAL_BOTTOM: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// Pillar cross-section as a fraction of the block edge.
pub(crate) const PILLAR_WIDTH: f32 = 1.0 / 3.0;

/// Full-texture UVs for quads listed top-left, top-right, bottom-right, bottom-left.
pub(crate) const FULL_UV: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
