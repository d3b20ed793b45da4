use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cubit_blocks::{BlockProperties, Orientation, ShapeType, Sides};
use cubit_mesh::{BlockMesh, build_block_mesh, synthesize};

fn sample_props() -> Vec<BlockProperties> {
    let shapes = [
        ShapeType::Cube,
        ShapeType::PillarCenter,
        ShapeType::PillarCorner,
        ShapeType::SlopeHalf,
    ];
    let mut out = Vec::new();
    for shape in shapes {
        for o in Orientation::ALL {
            out.push(BlockProperties::new(shape, o, Sides::all(), 0.5, 1.0));
        }
    }
    out
}

fn bench_synthesize_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize");
    let props = sample_props();
    group.bench_function("all_shapes_all_orientations", |b| {
        b.iter(|| {
            for p in &props {
                black_box(synthesize(black_box(p)).ok());
            }
        })
    });
    group.finish();
}

fn bench_grid_meshes(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_mesh");
    // 10x5x10 cells, matching the default editor world.
    let props = sample_props();
    group.bench_function("grid_10x5x10", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for i in 0..500 {
                let p = &props[i % props.len()];
                let mesh = build_block_mesh(p).unwrap_or_else(|_| BlockMesh::default());
                total += mesh.triangle_count();
            }
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_synthesize_shapes, bench_grid_meshes);
criterion_main!(benches);
