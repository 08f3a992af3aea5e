//! Benchmarks for the canonical order.
//!
//! These benchmarks measure the comparator on its own, and through the ordered
//! containers that depend on it (set construction and interning).
//!
//! Run with:
//! ```bash
//! cargo bench --bench compare
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use settree_rs::intern::Interner;
use settree_rs::object::Object;
use settree_rs::order::compare;

/// Generate a deterministic random object of bounded depth and width.
fn random_object(rng: &mut ChaCha8Rng, depth: usize, width: usize) -> Object {
    if depth == 0 || rng.random_bool(0.2) {
        return Object::atom(rng.random_range(0..16u32).to_string());
    }
    let size = rng.random_range(0..=width);
    Object::set((0..size).map(|_| random_object(rng, depth - 1, width)))
}

/// Rebuild an object with fresh allocations, so that comparisons cannot short-circuit.
fn rebuild(x: &Object) -> Object {
    match x.as_set() {
        Ok(elements) => Object::set(elements.iter().map(rebuild)),
        Err(_) => Object::atom(x.name().unwrap_or_default()),
    }
}

// ============================================================================
// Benchmark: Comparing equal objects (worst case: full traversal)
// ============================================================================

fn bench_compare_equal(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare/equal");

    for depth in [2, 4, 6] {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let a = random_object(&mut rng, depth, 4);
        let b = rebuild(&a);

        group.bench_with_input(BenchmarkId::new("random", depth), &(a, b), |bench, (a, b)| {
            bench.iter(|| compare(a, b));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Deep von Neumann ordinals
// ============================================================================

fn bench_compare_ordinals(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare/ordinals");

    for n in [8, 16, 32] {
        let a = Object::von_neumann(n);
        let b = rebuild(&a);

        group.bench_with_input(BenchmarkId::new("von_neumann", n), &(a, b), |bench, (a, b)| {
            bench.iter(|| compare(a, b));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Sorting random objects
// ============================================================================

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare/sort");

    for count in [100, 1000] {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let objects: Vec<Object> = (0..count).map(|_| random_object(&mut rng, 4, 4)).collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("random", count), &objects, |bench, objects| {
            bench.iter_with_setup(|| objects.clone(), |mut objects| {
                objects.sort();
                objects
            });
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Interning random objects
// ============================================================================

fn bench_intern(c: &mut Criterion) {
    let mut group = c.benchmark_group("intern");

    for count in [100, 1000] {
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        let objects: Vec<Object> = (0..count).map(|_| random_object(&mut rng, 4, 4)).collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("random", count), &objects, |bench, objects| {
            bench.iter(|| {
                let interner = Interner::new();
                for x in objects {
                    interner.intern(x.clone());
                }
                interner.len()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compare_equal,
    bench_compare_ordinals,
    bench_sort,
    bench_intern,
);

criterion_main!(benches);
