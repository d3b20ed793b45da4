use cubit_blocks::{BlockProperties, Side, Sides};
use cubit_geom::Vec3;

use super::{EMIT_ORDER, cube_side};
use crate::constants::*;
use crate::face::Face;

#[inline]
fn lift(p: Vec3, h: f32) -> Vec3 {
    Vec3::new(p.x, p.y * h, p.z)
}

/// Ramp rising from `height_low` at the front edge to `height_high` at the back edge.
pub(crate) fn emit_slope_half(props: &BlockProperties, visible: Sides, out: &mut Vec<Face>) {
    let lo = props.height_low();
    let hi = props.height_high();
    for side in EMIT_ORDER.into_iter().filter(|s| visible.has(*s)) {
        let face = match side {
            Side::Top => Face::with_computed_normal(
                side,
                [
                    lift(BACK_TOP_LEFT, hi),
                    lift(BACK_TOP_RIGHT, hi),
                    lift(FRONT_TOP_RIGHT, lo),
                    lift(FRONT_TOP_LEFT, lo),
                ],
                FULL_UV,
            ),
            Side::Front => {
                if lo <= 0.0 {
                    continue;
                }
                Face::new(
                    side,
                    [
                        lift(FRONT_TOP_LEFT, lo),
                        lift(FRONT_TOP_RIGHT, lo),
                        FRONT_BOTTOM_RIGHT,
                        FRONT_BOTTOM_LEFT,
                    ],
                    NORMAL_FRONT,
                    [(0.0, 1.0 - lo), (1.0, 1.0 - lo), (1.0, 1.0), (0.0, 1.0)],
                )
            }
            Side::Back => Face::new(
                side,
                [
                    lift(BACK_TOP_RIGHT, hi),
                    lift(BACK_TOP_LEFT, hi),
                    BACK_BOTTOM_LEFT,
                    BACK_BOTTOM_RIGHT,
                ],
                NORMAL_BACK,
                [(0.0, 1.0 - hi), (1.0, 1.0 - hi), (1.0, 1.0), (0.0, 1.0)],
            ),
            Side::Left => Face::new(
                side,
                [
                    lift(BACK_TOP_LEFT, hi),
                    lift(FRONT_TOP_LEFT, lo),
                    FRONT_BOTTOM_LEFT,
                    BACK_BOTTOM_LEFT,
                ],
                NORMAL_LEFT,
                [(0.0, 1.0 - hi), (1.0, 1.0 - lo), (1.0, 1.0), (0.0, 1.0)],
            ),
            Side::Right => Face::new(
                side,
                [
                    lift(FRONT_TOP_RIGHT, lo),
                    lift(BACK_TOP_RIGHT, hi),
                    BACK_BOTTOM_RIGHT,
                    FRONT_BOTTOM_RIGHT,
                ],
                NORMAL_RIGHT,
                [(0.0, 1.0 - lo), (1.0, 1.0 - hi), (1.0, 1.0), (0.0, 1.0)],
            ),
            Side::Bottom => {
                let (corners, normal) = cube_side(side);
                Face::new(side, corners, normal, FULL_UV)
            }
        };
        out.push(face);
    }
}
