//! Per-shape quad emitters. Each works in the canonical (north facing) frame and only
//! sees the side set already remapped into that frame.

mod cube;
mod pillar;
mod slope;

pub(crate) use cube::emit_cube;
pub(crate) use pillar::{PillarAnchor, emit_pillar};
pub(crate) use slope::emit_slope_half;

use cubit_blocks::Side;
use cubit_geom::Vec3;

use crate::constants::*;

/// Order in which sides are emitted for every shape.
pub(crate) const EMIT_ORDER: [Side; 6] = [
    Side::Top,
    Side::Front,
    Side::Back,
    Side::Left,
    Side::Right,
    Side::Bottom,
];

/// Corners (wound for [`crate::QUAD_INDICES`]) and outward normal of a full cube side.
pub(crate) fn cube_side(side: Side) -> ([Vec3; 4], Vec3) {
    match side {
        Side::Left => (
            [BACK_TOP_LEFT, FRONT_TOP_LEFT, FRONT_BOTTOM_LEFT, BACK_BOTTOM_LEFT],
            NORMAL_LEFT,
        ),
        Side::Right => (
            [FRONT_TOP_RIGHT, BACK_TOP_RIGHT, BACK_BOTTOM_RIGHT, FRONT_BOTTOM_RIGHT],
            NORMAL_RIGHT,
        ),
        Side::Front => (
            [FRONT_TOP_LEFT, FRONT_TOP_RIGHT, FRONT_BOTTOM_RIGHT, FRONT_BOTTOM_LEFT],
            NORMAL_FRONT,
        ),
        Side::Back => (
            [BACK_TOP_RIGHT, BACK_TOP_LEFT, BACK_BOTTOM_LEFT, BACK_BOTTOM_RIGHT],
            NORMAL_BACK,
        ),
        Side::Top => (
            [BACK_TOP_LEFT, BACK_TOP_RIGHT, FRONT_TOP_RIGHT, FRONT_TOP_LEFT],
            NORMAL_TOP,
        ),
        Side::Bottom => (
            [FRONT_BOTTOM_LEFT, FRONT_BOTTOM_RIGHT, BACK_BOTTOM_RIGHT, BACK_BOTTOM_LEFT],
            NORMAL_BOTTOM,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::quad_normal;

    #[test]
    fn cube_side_winding_matches_normals() {
        for side in EMIT_ORDER {
            let (corners, n) = cube_side(side);
            assert_eq!(quad_normal(&corners), n, "{side:?}");
        }
    }
}
