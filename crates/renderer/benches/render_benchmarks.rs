//! Benchmarks for the renderer crate - aggregation, spreading and mapping.
//!
//! Run with: cargo bench --package renderer -- spread
//! Or: cargo bench --package renderer --bench render_benchmarks

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use density_common::{Cartesian, Viewport};
use rand::Rng;
use renderer::composite::composite_over;
use renderer::png::{encode_pixel_grid, CompressionLevel};
use renderer::{default_mapping, simple_mapping, Color, ColorMapping, Scene};

fn demo_viewport() -> Viewport {
    Viewport::new(-5.0, 5.0, -5.0, 5.0).unwrap()
}

/// Generate standard-normal points, the same shape as the demo renderer uses.
fn generate_points(count: usize) -> Vec<Cartesian> {
    test_utils::seeded_gaussian(count, 0x5eed)
}

/// Generate a count grid spanning several orders of magnitude.
fn generate_counts(width: usize, height: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..width * height)
        .map(|_| {
            let exponent: u32 = rng.gen_range(0..7);
            if exponent == 0 {
                0
            } else {
                10u64.pow(exponent) + rng.gen_range(0..10)
            }
        })
        .collect()
}

/// A scene at `size x size` filled with the demo distribution.
fn populated_scene(size: u32) -> Scene {
    let mut scene = Scene::new(size, size, demo_viewport()).unwrap();
    scene.aggregate(&generate_points(200_000));
    scene
}

// =============================================================================
// AGGREGATE BENCHMARKS
// =============================================================================

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for count in [10_000usize, 100_000, 1_000_000] {
        let points = generate_points(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("800x800", count), &points, |b, points| {
            let mut scene = Scene::new(800, 800, demo_viewport()).unwrap();
            b.iter(|| {
                scene.clear();
                scene.aggregate(black_box(points));
            });
        });
    }

    group.finish();
}

// =============================================================================
// SPREAD BENCHMARKS
// =============================================================================

fn bench_spread(c: &mut Criterion) {
    let mut group = c.benchmark_group("spread");

    // 32x32 stays below the parallel threshold
    for size in [32u32, 256, 800] {
        let scene = populated_scene(size);
        group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));

        for radius in [1u8, 3] {
            group.bench_with_input(
                BenchmarkId::new(format!("r{}", radius), format!("{}x{}", size, size)),
                &scene,
                |b, scene| {
                    b.iter(|| {
                        let mut s = scene.clone();
                        s.spread(black_box(radius));
                        s
                    });
                },
            );
        }
    }

    group.finish();
}

// =============================================================================
// MAPPING BENCHMARKS
// =============================================================================

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping");

    for (width, height) in [(256, 256), (800, 800)] {
        let counts = generate_counts(width, height);
        group.throughput(Throughput::Elements((width * height) as u64));

        group.bench_with_input(
            BenchmarkId::new("logarithmic", format!("{}x{}", width, height)),
            &counts,
            |b, counts| b.iter(|| default_mapping().map(black_box(counts))),
        );

        group.bench_with_input(
            BenchmarkId::new("simple", format!("{}x{}", width, height)),
            &counts,
            |b, counts| b.iter(|| simple_mapping(255, 255, 255).map(black_box(counts))),
        );
    }

    group.finish();
}

// =============================================================================
// FULL PIPELINE BENCHMARK
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    group.sample_size(10);

    let points = generate_points(100_000);
    group.bench_function("demo_800x800", |b| {
        b.iter(|| {
            let mut scene = Scene::new(800, 800, demo_viewport()).unwrap();
            for chunk in points.chunks(1000) {
                scene.aggregate(chunk);
            }
            scene.spread(1);
            let layer = scene.render(&default_mapping()).unwrap();
            let image = composite_over(&layer, Color::BLACK);
            encode_pixel_grid(&image, CompressionLevel::Fast).unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_aggregate,
    bench_spread,
    bench_mapping,
    bench_full_pipeline,
);
criterion_main!(benches);
