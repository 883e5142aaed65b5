//! Performance benchmarks for lattice construction.
//!
//! Run with: `cargo bench --bench lattice`
//!
//! | Operation | Notes |
//! |-----------|-------|
//! | Enumeration | Brute-force double powerset vs constructive growth |
//! | Dense relation | O(n²) pairwise preorder tests |
//! | Full build | Dense relation + all-pairs Bellman-Ford |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pid_lattice::{
    AtomEnumerator, BruteForceEnumerator, ConstructiveEnumerator, LabeledLattice,
    LatticeBuilder, LatticeConfig,
};

/// Benchmark both enumeration strategies.
fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumeration");

    for inputs in [3, 4] {
        group.bench_with_input(BenchmarkId::new("brute_force", inputs), &inputs, |b, &k| {
            b.iter(|| BruteForceEnumerator.enumerate(black_box(k)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("constructive", inputs), &inputs, |b, &k| {
            b.iter(|| ConstructiveEnumerator.enumerate(black_box(k)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark the dense relation on its own.
fn bench_dense_relation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_relation");
    let builder = LatticeBuilder::new();

    for inputs in [3, 4] {
        let atoms = ConstructiveEnumerator.enumerate(inputs).unwrap();
        group.bench_with_input(BenchmarkId::new("inputs", inputs), &atoms, |b, atoms| {
            b.iter(|| builder.dense_relation(black_box(atoms.atoms())).unwrap())
        });
    }

    group.finish();
}

/// Benchmark the full pipeline, labels included.
fn bench_full_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_build");
    group.sample_size(10);

    for inputs in [3, 4] {
        let config = LatticeConfig::for_inputs(inputs);
        group.bench_with_input(BenchmarkId::new("inputs", inputs), &config, |b, config| {
            b.iter(|| LabeledLattice::compute(black_box(config)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_enumeration, bench_dense_relation, bench_full_build);
criterion_main!(benches);
