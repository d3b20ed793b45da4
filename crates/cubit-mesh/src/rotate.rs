//! Yaw handling: side remapping and quarter-turn rotation of synthesized quads.

use cubit_blocks::{BLOCK_SIZE, Orientation, Side, Sides};
use cubit_geom::Vec3;

use crate::face::Face;

/// Canonical side that ends up at physical `side` once a block is turned to `orientation`.
/// Top and bottom pass through.
#[inline]
pub fn canonical_side(side: Side, orientation: Orientation) -> Side {
    match side.horizontal_index() {
        Some(n) => {
            let step = orientation.rotation_step() as usize;
            Side::HORIZONTAL[(n + 4 - step) % 4]
        }
        None => side,
    }
}

/// Physical side a canonical side faces under `orientation`. Inverse of [`canonical_side`].
#[inline]
pub fn physical_side(side: Side, orientation: Orientation) -> Side {
    match side.horizontal_index() {
        Some(n) => {
            let step = orientation.rotation_step() as usize;
            Side::HORIZONTAL[(n + step) % 4]
        }
        None => side,
    }
}

/// Maps a physical side set into the canonical frame of a block facing `orientation`.
pub fn remap_sides(sides: Sides, orientation: Orientation) -> Sides {
    sides
        .sides()
        .map(|s| canonical_side(s, orientation))
        .collect()
}

/// One clockwise quarter turn (seen from above) about the vertical axis through `center`.
#[inline]
fn quarter_turn(p: Vec3, cx: f32, cz: f32) -> Vec3 {
    let dx = p.x - cx;
    let dz = p.z - cz;
    Vec3::new(cx - dz, p.y, cz + dx)
}

/// Rotates a face from the canonical frame into `orientation` about the block's vertical
/// center axis. Positions and normals turn together; UVs are untouched.
pub fn rotate_face(face: &Face, orientation: Orientation) -> Face {
    let steps = orientation.rotation_step();
    if steps == 0 {
        return *face;
    }
    let c = BLOCK_SIZE / 2.0;
    let mut out = *face;
    for v in &mut out.vertices {
        for _ in 0..steps {
            v.position = quarter_turn(v.position, c, c);
            v.normal = quarter_turn(v.normal, 0.0, 0.0);
        }
    }
    out.side = physical_side(face.side, orientation);
    out
}
