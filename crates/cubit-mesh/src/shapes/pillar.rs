use cubit_blocks::{BLOCK_SIZE, Side, Sides};
use cubit_geom::Vec3;

use super::{EMIT_ORDER, cube_side};
use crate::constants::PILLAR_WIDTH as W;
use crate::face::Face;

/// Where the one-third-wide post stands inside the cell footprint.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum PillarAnchor {
    /// Against the back-left corner (the block-local origin).
    Corner,
    /// In the middle of the footprint.
    Center,
}

impl PillarAnchor {
    fn offset(self) -> f32 {
        match self {
            PillarAnchor::Corner => 0.0,
            PillarAnchor::Center => BLOCK_SIZE * W,
        }
    }

    fn uvs(self, side: Side) -> [(f32, f32); 4] {
        match (self, side) {
            (PillarAnchor::Corner, Side::Top) => [(0.0, 0.0), (W, 0.0), (W, W), (0.0, W)],
            (PillarAnchor::Corner, Side::Left | Side::Front) => {
                [(0.0, 0.0), (W, 0.0), (W, 1.0), (0.0, 1.0)]
            }
            (PillarAnchor::Corner, _) => [(1.0 - W, 0.0), (1.0, 0.0), (1.0, 1.0), (1.0 - W, 1.0)],
            (PillarAnchor::Center, Side::Top) => {
                [(W, W), (2.0 * W, W), (2.0 * W, 2.0 * W), (W, 2.0 * W)]
            }
            (PillarAnchor::Center, _) => [(W, 0.0), (2.0 * W, 0.0), (2.0 * W, 1.0), (W, 1.0)],
        }
    }
}

/// Full-height post with a one-third square cross-section. Never emits a bottom.
pub(crate) fn emit_pillar(anchor: PillarAnchor, visible: Sides, out: &mut Vec<Face>) {
    let off = anchor.offset();
    let shrink = |p: Vec3| Vec3::new(p.x * W + off, p.y, p.z * W + off);
    for side in EMIT_ORDER
        .into_iter()
        .filter(|s| *s != Side::Bottom && visible.has(*s))
    {
        let (corners, normal) = cube_side(side);
        out.push(Face::new(side, corners.map(shrink), normal, anchor.uvs(side)));
    }
}
