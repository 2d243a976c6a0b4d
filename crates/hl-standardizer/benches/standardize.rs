use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hl_standardizer::{HighLevelQuantities, Standardizer, StandardizerConfig};

fn jets(n: usize) -> HighLevelQuantities {
    let mut quantities = HighLevelQuantities::new();
    quantities.insert_column("mass", (0..n).map(|i| 40e3 + i as f64 * 13.0).collect());
    quantities.insert_column("d12", (0..n).map(|i| 1e10 + i as f64 * 7e6).collect());
    quantities.insert_column("d23", (0..n).map(|i| 2e9 + i as f64 * 3e6).collect());
    quantities.insert_column("ecf1", (0..n).map(|i| 3e8 + i as f64 * 1e5).collect());
    quantities.insert_column("ecf2", (0..n).map(|i| 1e13 + i as f64 * 4e10).collect());
    quantities.insert_column("ecf3", (0..n).map(|i| 1e18 + i as f64 * 9e15).collect());
    quantities.insert_column("tau21", (0..n).map(|i| (i % 100) as f64 / 100.0).collect());
    quantities.insert_column("tau32", (0..n).map(|i| (i % 37) as f64 / 37.0).collect());
    quantities
}

fn bench_standardize(c: &mut Criterion) {
    let sequential = Standardizer::default();
    let parallel = Standardizer::new(StandardizerConfig {
        parallel: true,
        ..Default::default()
    });

    for size in [1_000, 10_000, 100_000].iter() {
        let quantities = jets(*size);

        c.bench_with_input(BenchmarkId::new("sequential", size), &quantities, |b, q| {
            b.iter(|| black_box(sequential.standardize(black_box(q)).unwrap()));
        });

        c.bench_with_input(BenchmarkId::new("parallel", size), &quantities, |b, q| {
            b.iter(|| black_box(parallel.standardize(black_box(q)).unwrap()));
        });
    }
}

criterion_group!(benches, bench_standardize);
criterion_main!(benches);
