use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::prelude::SmallRng;

use guillotine_rs::entities::Tiling;
use guillotine_rs::geometry::primitives::Rect;
use guillotine_rs::separability::decide;
use guillotine_rs::util::generator;

criterion_main!(benches);
criterion_group!(benches, separable_bench, non_separable_bench);

const N_TILES: [usize; 3] = [1_000, 10_000, 100_000];

/// Benchmark the full decision procedure on random guillotine tilings,
/// the verdict is always separable so every window resolves completely.
fn separable_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide_separable");
    group.sample_size(10);
    for n in N_TILES {
        let mut rng = SmallRng::seed_from_u64(0);
        let region = Rect::try_new(0, 0, 4 * n as i64, 3 * n as i64).unwrap();
        let tiling = Tiling::new(generator::guillotine_tiling(&mut rng, region, n));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let verdict = decide(black_box(&tiling));
                assert!(verdict.separable);
            })
        });
    }
    group.finish();
}

/// Benchmark the failure path: one pinwheel buried in an otherwise
/// separable tiling forces the engine all the way to a definite refusal.
fn non_separable_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide_non_separable");
    group.sample_size(10);
    for n in N_TILES {
        let mut rng = SmallRng::seed_from_u64(0);
        let region = Rect::try_new(0, 0, 4 * n as i64, 3 * n as i64).unwrap();
        let tiling = Tiling::new(generator::tiling_with_pinwheel(&mut rng, region, n));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let verdict = decide(black_box(&tiling));
                assert!(!verdict.separable);
            })
        });
    }
    group.finish();
}
