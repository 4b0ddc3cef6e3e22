//! Criterion benchmarks for subset classification and batch evaluation.
//! Focus sizes: n in {2, 10, 20, 40} points per subset.
//! Sparse draws (full 0..=50 grid) mostly run all pairs; dense draws exit early.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use recurrence::rand::{draw_batch, draw_subset, Count, GenCfg, ReplayToken};
use recurrence::{classify, evaluate};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for &n in &[2usize, 10, 20, 40] {
        for (label, coord_max) in [("sparse", 50), ("dense", 5)] {
            group.bench_with_input(BenchmarkId::new(label, n), &n, |b, &n| {
                b.iter_batched(
                    || draw_subset(&mut StdRng::seed_from_u64(43), n, coord_max),
                    |pts| classify(&pts),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let cfg = GenCfg {
        subsets: Count::Fixed(5),
        points: Count::Fixed(40),
        coord_max: 50,
    };
    c.bench_function("evaluate_full_batch", |b| {
        b.iter_batched(
            || draw_batch(cfg, ReplayToken { seed: 44, index: 0 }),
            |batch| evaluate(&batch),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_classify, bench_evaluate);
criterion_main!(benches);
