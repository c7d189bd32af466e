//! Benchmark for folds and binds over the list instances.
//!
//! Compares the lazy `LinkedList` against the strict `List`, and the
//! instance-specific folds against the generic defaults.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lawful::typeclass::{Bind, Foldable, defaults};
use lawful::types::{LinkedList, LinkedListKind, List, ListKind};
use std::hint::black_box;

// =============================================================================
// foldl Benchmark
// =============================================================================

fn benchmark_foldl(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("foldl");

    for size in [100_u64, 1000, 10000] {
        let linked: LinkedList<u64> = (0..size).collect();
        let strict: List<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("LinkedList", size), &linked, |bencher, list| {
            bencher.iter(|| LinkedListKind::foldl(black_box(list), 0_u64, |acc, x| acc + x));
        });

        group.bench_with_input(BenchmarkId::new("List", size), &strict, |bencher, list| {
            bencher.iter(|| ListKind::foldl(black_box(list), 0_u64, |acc, x| acc + x));
        });

        // Default foldl, routed through foldr
        group.bench_with_input(
            BenchmarkId::new("List/default", size),
            &strict,
            |bencher, list| {
                bencher.iter(|| {
                    defaults::foldl::<ListKind, u64, u64>(black_box(list), 0, |acc, x| acc + x)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Lazy traversal Benchmark
// =============================================================================

fn benchmark_lazy_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lazy_traversal");

    for size in [100_usize, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("scanl_drop", size), &size, |bencher, &size| {
            bencher.iter(|| {
                LinkedList::repeat(1_u64)
                    .scanl(|acc, x| acc + x)
                    .drop(black_box(size))
                    .head(0)
            });
        });
    }

    group.finish();
}

// =============================================================================
// bind Benchmark
// =============================================================================

fn benchmark_bind(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bind");

    for size in [100_u64, 1000] {
        let linked: LinkedList<u64> = (0..size).collect();
        let strict: List<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("LinkedList", size), &linked, |bencher, list| {
            bencher.iter(|| {
                let doubled = LinkedListKind::bind(black_box(list.clone()), |x| {
                    [x, x + 1].into_iter().collect()
                });
                doubled.len()
            });
        });

        group.bench_with_input(BenchmarkId::new("List", size), &strict, |bencher, list| {
            bencher.iter(|| {
                let doubled =
                    ListKind::bind(black_box(list.clone()), |x| List::from(vec![x, x + 1]));
                doubled.len()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_foldl, benchmark_lazy_traversal, benchmark_bind);

criterion_main!(benches);
