use cubit_blocks::{BLOCK_SIZE as S, BlockProperties, Orientation, ShapeType, Side, Sides};
use cubit_geom::Vec3;
use cubit_mesh::{BlockMesh, Face, MeshError, QUAD_INDICES, build_block_mesh, synthesize};

fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps && (a.z - b.z).abs() <= eps
}

fn face_on(faces: &[Face], side: Side) -> Option<&Face> {
    faces.iter().find(|f| f.side == side)
}

fn side_normal(side: Side) -> Vec3 {
    match side {
        Side::Left => Vec3::new(-1.0, 0.0, 0.0),
        Side::Right => Vec3::new(1.0, 0.0, 0.0),
        Side::Front => Vec3::new(0.0, 0.0, 1.0),
        Side::Back => Vec3::new(0.0, 0.0, -1.0),
        Side::Top => Vec3::new(0.0, 1.0, 0.0),
        Side::Bottom => Vec3::new(0.0, -1.0, 0.0),
    }
}

#[test]
fn cube_with_all_sides_has_six_quads() {
    let faces = synthesize(&BlockProperties::cube()).expect("cube");
    assert_eq!(faces.len(), 6);
    for f in &faces {
        assert_eq!(f.vertices.len(), 4);
        assert_eq!(f.indices(), [0, 3, 1, 3, 2, 1]);
    }
    assert_eq!(QUAD_INDICES, [0, 3, 1, 3, 2, 1]);
}

#[test]
fn cube_with_no_sides_is_empty() {
    let props = BlockProperties::cube().with_sides(Sides::empty());
    assert!(synthesize(&props).expect("cube").is_empty());
}

#[test]
fn top_face_is_orientation_invariant() {
    let north = synthesize(&BlockProperties::cube()).expect("cube");
    let top_n = face_on(&north, Side::Top).expect("top");
    for o in Orientation::ALL {
        let faces = synthesize(&BlockProperties::cube().with_orientation(o)).expect("cube");
        let top = face_on(&faces, Side::Top).expect("top");
        assert!(vapprox(top.normal(), Vec3::UP, 1e-6));
        for p in top.positions() {
            assert!(top_n.positions().iter().any(|q| vapprox(p, *q, 1e-4)));
        }
    }
}

#[test]
fn slope_without_front_height_omits_front() {
    let props = BlockProperties::cube()
        .with_shape(ShapeType::SlopeHalf)
        .with_heights(0.0, 1.0);
    let faces = synthesize(&props).expect("slope");
    assert!(face_on(&faces, Side::Front).is_none());
    assert_eq!(faces.len(), 5);

    let raised = props.with_heights(0.25, 1.0);
    let faces = synthesize(&raised).expect("slope");
    let front = face_on(&faces, Side::Front).expect("front");
    assert!(front.positions().iter().all(|p| p.y <= 0.25 * S + 1e-5));
}

#[test]
fn full_height_slope_matches_cube_corners() {
    let slope = BlockProperties::cube()
        .with_shape(ShapeType::SlopeHalf)
        .with_heights(1.0, 1.0);
    let cube = BlockProperties::cube();
    for o in Orientation::ALL {
        let a = synthesize(&slope.with_orientation(o)).expect("slope");
        let b = synthesize(&cube.with_orientation(o)).expect("cube");
        assert_eq!(a.len(), b.len());
        for side in Side::ALL {
            let fa = face_on(&a, side).expect("slope side");
            let fb = face_on(&b, side).expect("cube side");
            for (p, q) in fa.positions().iter().zip(fb.positions().iter()) {
                assert!(vapprox(*p, *q, 1e-4), "{o:?} {side:?}: {p:?} vs {q:?}");
            }
            assert!(vapprox(fa.normal(), fb.normal(), 1e-5));
        }
    }
}

#[test]
fn sloped_top_normal_follows_the_ramp() {
    let props = BlockProperties::cube()
        .with_shape(ShapeType::SlopeHalf)
        .with_heights(0.0, 1.0);
    let r = std::f32::consts::FRAC_1_SQRT_2;

    let north = synthesize(&props).expect("slope");
    let top = face_on(&north, Side::Top).expect("top");
    assert!(vapprox(top.normal(), Vec3::new(0.0, r, r), 1e-5));

    // Turned east the high edge sits at +x, so the top leans toward -x.
    let east = synthesize(&props.with_orientation(Orientation::East)).expect("slope");
    let top = face_on(&east, Side::Top).expect("top");
    assert!(vapprox(top.normal(), Vec3::new(-r, r, 0.0), 1e-5));
    let high = top.positions().iter().filter(|p| (p.y - S).abs() < 1e-4).count();
    assert_eq!(high, 2);
    assert!(
        top.positions()
            .iter()
            .filter(|p| (p.y - S).abs() < 1e-4)
            .all(|p| (p.x - S).abs() < 1e-4)
    );
}

#[test]
fn slope_side_uvs_stretch_with_height() {
    let props = BlockProperties::cube()
        .with_shape(ShapeType::SlopeHalf)
        .with_heights(0.5, 1.0);
    let faces = synthesize(&props).expect("slope");
    let front = face_on(&faces, Side::Front).expect("front");
    assert!((front.vertices[0].uv.y - 0.5).abs() < 1e-6);
    let left = face_on(&faces, Side::Left).expect("left");
    assert!((left.vertices[0].uv.y - 0.0).abs() < 1e-6);
    assert!((left.vertices[1].uv.y - 0.5).abs() < 1e-6);
}

#[test]
fn pillars_never_emit_bottom_and_stay_narrow() {
    for shape in [ShapeType::PillarCorner, ShapeType::PillarCenter] {
        let props = BlockProperties::cube().with_shape(shape);
        let faces = synthesize(&props).expect("pillar");
        assert_eq!(faces.len(), 5);
        assert!(face_on(&faces, Side::Bottom).is_none());
        let mesh = BlockMesh::from_faces(&faces);
        let b = mesh.bounds().expect("bounds");
        assert!((b.extent().x - S / 3.0).abs() < 1e-4);
        assert!((b.extent().z - S / 3.0).abs() < 1e-4);
        assert!((b.extent().y - S).abs() < 1e-4);
        if shape == ShapeType::PillarCenter {
            assert!(vapprox(b.center(), Vec3::new(S / 2.0, S / 2.0, S / 2.0), 1e-4));
        } else {
            assert!(vapprox(b.min, Vec3::ZERO, 1e-4));
        }
    }
}

#[test]
fn corner_pillar_follows_orientation() {
    let props = BlockProperties::cube()
        .with_shape(ShapeType::PillarCorner)
        .with_orientation(Orientation::South);
    let mesh = build_block_mesh(&props).expect("mesh");
    let b = mesh.bounds().expect("bounds");
    // Half a turn moves the back-left post to the front-right corner.
    assert!(vapprox(b.max, Vec3::new(S, S, S), 1e-4));
    assert!(vapprox(b.min, Vec3::new(2.0 * S / 3.0, 0.0, 2.0 * S / 3.0), 1e-4));
}

#[test]
fn hidden_physical_side_stays_hidden_under_rotation() {
    for o in Orientation::ALL {
        let props = BlockProperties::cube()
            .with_orientation(o)
            .with_sides(Sides::all().with_side(Side::Left, false));
        let faces = synthesize(&props).expect("cube");
        assert_eq!(faces.len(), 5);
        assert!(face_on(&faces, Side::Left).is_none(), "{o:?}");
        assert!(
            faces
                .iter()
                .all(|f| !vapprox(f.normal(), side_normal(Side::Left), 1e-5))
        );
    }
}

#[test]
fn quarter_slope_is_unsupported() {
    let props = BlockProperties::cube().with_shape(ShapeType::SlopeQuarter);
    assert_eq!(
        synthesize(&props),
        Err(MeshError::UnsupportedShape(ShapeType::SlopeQuarter))
    );
    assert!(build_block_mesh(&props).is_err());
}

#[test]
fn block_mesh_flattens_faces() {
    let mesh = build_block_mesh(&BlockProperties::cube()).expect("mesh");
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.uv.len(), 48);
    assert!(mesh.idx.iter().all(|i| (*i as usize) < 24));
    assert_eq!(&mesh.idx[6..12], &[4, 7, 5, 7, 6, 5]);
    let b = mesh.bounds().expect("bounds");
    assert!(vapprox(b.min, Vec3::ZERO, 1e-6));
    assert!(vapprox(b.max, Vec3::splat(S), 1e-6));

    let mut reused = mesh.clone();
    reused.clear_keep_capacity();
    assert!(reused.is_empty());
    assert!(reused.bounds().is_none());
}
