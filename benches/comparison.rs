use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dense_bitset::BitSet;
use std::collections::BTreeSet;

/// Pseudo-random indices below `size` (LCG, reproducible)
fn scattered(size: usize, count: usize, seed: u64) -> Vec<usize> {
    let a = 1664525u64;
    let c = 1013904223u64;
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = a.wrapping_mul(state).wrapping_add(c);
            (state % size as u64) as usize
        })
        .collect()
}

/// Benchmark union of two half-populated sets
fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");

    for size in [1_000usize, 10_000, 100_000].iter() {
        let left = scattered(*size, size / 2, 1);
        let right = scattered(*size, size / 2, 2);

        group.bench_with_input(BenchmarkId::new("BitSet", size), size, |b, &size| {
            let a = BitSet::from_indices(size, left.iter().copied());
            let other = BitSet::from_indices(size, right.iter().copied());

            b.iter(|| {
                let mut merged = a.clone();
                merged.union(black_box(&other));
                merged
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), size, |b, _| {
            let a: BTreeSet<usize> = left.iter().copied().collect();
            let other: BTreeSet<usize> = right.iter().copied().collect();

            b.iter(|| {
                let mut merged = a.clone();
                merged.extend(black_box(&other).iter().copied());
                merged
            });
        });
    }

    group.finish();
}

/// Benchmark the liveness transfer function: out - def | use
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [64usize, 1_000, 10_000].iter() {
        let out = scattered(*size, size / 3, 3);
        let defs = scattered(*size, size / 10, 4);
        let uses = scattered(*size, size / 10, 5);

        group.bench_with_input(BenchmarkId::new("BitSet", size), size, |b, &size| {
            let out = BitSet::from_indices(size, out.iter().copied());
            let defs = BitSet::from_indices(size, defs.iter().copied());
            let uses = BitSet::from_indices(size, uses.iter().copied());

            b.iter(|| {
                let mut live_in = out.clone();
                live_in.subtract(&defs);
                live_in.union(&uses);
                live_in
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), size, |b, _| {
            let out: BTreeSet<usize> = out.iter().copied().collect();
            let defs: BTreeSet<usize> = defs.iter().copied().collect();
            let uses: BTreeSet<usize> = uses.iter().copied().collect();

            b.iter(|| {
                let mut live_in: BTreeSet<usize> = out.difference(&defs).copied().collect();
                live_in.extend(uses.iter().copied());
                live_in
            });
        });
    }

    group.finish();
}

/// Benchmark full iteration over set members
fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in [1_000usize, 100_000].iter() {
        let members = scattered(*size, size / 4, 6);

        group.bench_with_input(BenchmarkId::new("BitSet", size), size, |b, &size| {
            let set = BitSet::from_indices(size, members.iter().copied());
            b.iter(|| black_box(set.iter().sum::<usize>()));
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), size, |b, _| {
            let btree: BTreeSet<usize> = members.iter().copied().collect();
            b.iter(|| black_box(btree.iter().sum::<usize>()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_union, bench_transfer, bench_iteration);
criterion_main!(benches);
