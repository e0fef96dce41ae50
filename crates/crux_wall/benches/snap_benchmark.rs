//! Benchmark for nearest-slot snapping.
//!
//! Snapping runs once per frame while a hold is being dragged, so a
//! single query has a 16ms frame to hide in even on a big wall.
//!
//! Run with: cargo bench --package crux_wall --bench snap_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use crux_assets::RegionRect;
use crux_shared::Vec2;
use crux_wall::Wall;

fn build_wall(width: u32, height: u32, separation: f32) -> Wall {
    Wall::new(
        width,
        height,
        separation,
        0,
        RegionRect::new(0, 0, 64, 64),
        RegionRect::new(64, 0, 8, 8),
    )
    .unwrap()
}

fn benchmark_single_snap(c: &mut Criterion) {
    let wall = build_wall(12, 5, 0.25);

    c.bench_function("snap_small_wall", |b| {
        let mut t = 0.0f32;
        b.iter(|| {
            t += 0.3;
            let world = Vec2::new(t % 700.0, -(t * 0.4) % 300.0);
            black_box(wall.snap(black_box(world)))
        });
    });
}

fn benchmark_big_wall_sweep(c: &mut Criterion) {
    let wall = build_wall(200, 60, 0.25);
    let samples = 10_000u64;

    let mut group = c.benchmark_group("snap_sweep");
    group.throughput(Throughput::Elements(samples));
    group.sample_size(10);

    group.bench_function("10k_snaps_big_wall", |b| {
        b.iter(|| {
            for i in 0..samples {
                let x = (i % 100) as f32 * 128.0;
                let y = -((i / 100) as f32 * 38.0);
                black_box(wall.snap(Vec2::new(x, y)));
            }
        });
    });

    group.finish();
}

fn benchmark_lattice_generation(c: &mut Criterion) {
    c.bench_function("build_big_wall", |b| {
        b.iter(|| black_box(build_wall(black_box(200), black_box(60), 0.25)));
    });
}

criterion_group!(
    benches,
    benchmark_single_snap,
    benchmark_big_wall_sweep,
    benchmark_lattice_generation
);
criterion_main!(benches);
