use cubit_blocks::Sides;

use super::{EMIT_ORDER, cube_side};
use crate::constants::FULL_UV;
use crate::face::Face;

pub(crate) fn emit_cube(visible: Sides, out: &mut Vec<Face>) {
    for side in EMIT_ORDER.into_iter().filter(|s| visible.has(*s)) {
        let (corners, normal) = cube_side(side);
        out.push(Face::new(side, corners, normal, FULL_UV));
    }
}
