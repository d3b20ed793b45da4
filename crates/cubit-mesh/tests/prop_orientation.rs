use cubit_blocks::{BLOCK_SIZE as S, BlockProperties, Orientation, ShapeType, Side, Sides};
use cubit_geom::Vec3;
use cubit_mesh::{canonical_side, physical_side, quad_normal, remap_sides, synthesize};
use proptest::prelude::*;

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    (0u8..4).prop_map(Orientation::from_rotation)
}

fn arb_sides() -> impl Strategy<Value = Sides> {
    (0u8..64).prop_map(Sides::from_bits_truncate)
}

fn arb_shape() -> impl Strategy<Value = ShapeType> {
    prop_oneof![
        Just(ShapeType::Cube),
        Just(ShapeType::PillarCenter),
        Just(ShapeType::PillarCorner),
        Just(ShapeType::SlopeHalf),
    ]
}

fn arb_props() -> impl Strategy<Value = BlockProperties> {
    (arb_shape(), arb_orientation(), arb_sides(), 0.0f32..=1.0, 0.0f32..=1.0).prop_map(
        |(shape, o, sides, lo, hi)| BlockProperties::new(shape, o, sides, lo, hi),
    )
}

fn axis_normal(side: Side) -> Vec3 {
    match side {
        Side::Left => Vec3::new(-1.0, 0.0, 0.0),
        Side::Right => Vec3::new(1.0, 0.0, 0.0),
        Side::Front => Vec3::new(0.0, 0.0, 1.0),
        Side::Back => Vec3::new(0.0, 0.0, -1.0),
        Side::Top => Vec3::UP,
        Side::Bottom => Vec3::new(0.0, -1.0, 0.0),
    }
}

proptest! {
    // Remapping is a bijection on the horizontal sides
    #[test]
    fn remap_is_bijective(o in arb_orientation()) {
        let mut seen = Sides::empty();
        for s in Side::HORIZONTAL {
            let c = canonical_side(s, o);
            prop_assert!(c.is_horizontal());
            prop_assert!(!seen.has(c));
            seen = seen.with_side(c, true);
            prop_assert_eq!(physical_side(c, o), s);
        }
        prop_assert_eq!(seen, Sides::HORIZONTAL);
    }

    // Remapping with the inverse rotation step undoes the remap
    #[test]
    fn remap_roundtrip(sides in arb_sides(), o in arb_orientation()) {
        prop_assert_eq!(remap_sides(remap_sides(sides, o), o.inverse()), sides);
        prop_assert_eq!(remap_sides(sides, o).bits().count_ones(), sides.bits().count_ones());
    }

    // Every vertex stays inside the cell and every normal is unit length
    #[test]
    fn geometry_stays_in_cell(props in arb_props()) {
        let faces = synthesize(&props).expect("supported shape");
        prop_assert!(faces.len() <= 6);
        for f in &faces {
            prop_assert!((f.normal().length() - 1.0).abs() < 1e-4);
            for p in f.positions() {
                prop_assert!(p.x >= -1e-4 && p.x <= S + 1e-4);
                prop_assert!(p.y >= -1e-4 && p.y <= S + 1e-4);
                prop_assert!(p.z >= -1e-4 && p.z <= S + 1e-4);
            }
        }
    }

    // Axis-aligned faces carry the normal of the physical side they are tagged with
    #[test]
    fn side_tags_match_normals(props in arb_props()) {
        let faces = synthesize(&props).expect("supported shape");
        for f in &faces {
            let sloped = props.shape() == ShapeType::SlopeHalf && f.side == Side::Top;
            if !sloped {
                let n = axis_normal(f.side);
                prop_assert!((f.normal() - n).length() < 1e-5, "{:?} {:?}", f.side, f.normal());
            }
        }
    }

    // Emitted physical sides are exactly the requested ones the shape supports
    #[test]
    fn emitted_sides_respect_request(props in arb_props()) {
        let faces = synthesize(&props).expect("supported shape");
        let emitted: Sides = faces.iter().map(|f| f.side).collect();
        prop_assert_eq!(emitted.bits().count_ones() as usize, faces.len());
        prop_assert!(props.sides().contains(emitted));
        if props.shape() == ShapeType::Cube {
            prop_assert_eq!(emitted, props.sides());
        }
    }

    // Winding follows the stored normal for faces with area
    #[test]
    fn winding_agrees_with_normal(props in arb_props()) {
        let faces = synthesize(&props).expect("supported shape");
        for f in &faces {
            let corners = f.positions();
            let area = (corners[0] - corners[1]).cross(corners[2] - corners[1]).length();
            if area > 1e-3 {
                prop_assert!(quad_normal(&corners).dot(f.normal()) > 0.99);
            }
        }
    }
}
