use cubit_blocks::{BlockProperties, Orientation, Sides};
use cubit_geom::Vec3i;
use cubit_world::{Block, Grid, GridError};
use proptest::prelude::*;

fn dim() -> impl Strategy<Value = usize> {
    1usize..=8
}

fn any_coord() -> impl Strategy<Value = Vec3i> {
    (-3i32..12, -3i32..12, -3i32..12).prop_map(|(x, y, z)| Vec3i::new(x, y, z))
}

fn arb_props() -> impl Strategy<Value = BlockProperties> {
    ((0u8..4), (0u8..64)).prop_map(|(o, s)| {
        BlockProperties::cube()
            .with_orientation(Orientation::from_rotation(o))
            .with_sides(Sides::from_bits_truncate(s))
    })
}

proptest! {
    // index maps each in-bounds coordinate to a unique in-range slot
    #[test]
    fn index_is_unique_and_in_range(w in dim(), h in dim(), d in dim()) {
        let g = Grid::new(w, h, d);
        let expect = w * h * d;
        let mut seen = vec![false; expect];
        for z in 0..d { for y in 0..h { for x in 0..w {
            let c = Vec3i::new(x as i32, y as i32, z as i32);
            let i = g.index(c).expect("in bounds");
            prop_assert!(i < expect);
            prop_assert!(!seen[i]);
            seen[i] = true;
            prop_assert_eq!(g.dims().coord_of(i), Some(c));
        }}}
        prop_assert!(seen.into_iter().all(|b| b));
    }

    // set then get returns the stored block; out of range always fails
    #[test]
    fn set_get_roundtrip(w in dim(), h in dim(), d in dim(), c in any_coord(), props in arb_props()) {
        let mut g = Grid::new(w, h, d);
        if g.is_in_bounds(c) {
            let block = Block::new(c, props).expect("cube");
            prop_assert!(g.set(c, Some(block)).expect("set").is_none());
            let got = g.get(c).expect("get").expect("occupied");
            prop_assert_eq!(got.coord(), c);
            prop_assert_eq!(got.properties(), props);
            prop_assert_eq!(g.occupied_count(), 1);
            prop_assert!(g.set(c, None).expect("clear").is_some());
            prop_assert!(g.get(c).expect("get").is_none());
        } else {
            prop_assert!(g.get(c).is_err());
            prop_assert!(g.clear(c).is_err());
            let block = Block::new(c, props).expect("cube");
            prop_assert!(matches!(g.set(c, Some(block)), Err(GridError::Bounds(_))));
            prop_assert!(matches!(g.set(c, None), Err(GridError::Bounds(_))));
        }
    }

    // Every occupied slot holds the block for that coordinate
    #[test]
    fn occupied_slots_match_coordinates(cells in prop::collection::vec((0i32..6, 0i32..4, 0i32..6), 0..30)) {
        let mut g = Grid::new(6, 4, 6);
        for (x, y, z) in &cells {
            g.place(Vec3i::new(*x, *y, *z), BlockProperties::cube()).expect("place");
        }
        let mut unique: Vec<_> = cells.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(g.occupied_count(), unique.len());
        let mut last = None;
        for b in g.iter() {
            let c = b.coord();
            let i = g.index(c).expect("in bounds");
            prop_assert!(last.is_none_or(|l| l < i));
            last = Some(i);
            prop_assert!(g.get(c).expect("get").is_some_and(|s| s.coord() == c));
        }
    }

    // clamp always lands in bounds and is the identity inside
    #[test]
    fn clamp_lands_in_bounds(w in dim(), h in dim(), d in dim(), c in any_coord()) {
        let g = Grid::new(w, h, d);
        let k = g.dims().clamp(c);
        prop_assert!(g.is_in_bounds(k));
        if g.is_in_bounds(c) {
            prop_assert_eq!(k, c);
        }
    }
}
