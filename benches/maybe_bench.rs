//! Benchmark for Maybe combinators.
//!
//! Compares `Maybe` chains against the equivalent `Option` chains to
//! evaluate the overhead (if any) of the abstraction.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fs_maybe::control::Maybe;
use std::hint::black_box;

fn find(haystack: &[i32], needle: i32) -> Maybe<i32> {
    Maybe::from_nullable(haystack.iter().copied().find(|element| *element == needle))
}

// =============================================================================
// Bind Chain Benchmarks
// =============================================================================

fn benchmark_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bind_chain");

    for length in [4_usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("maybe_bind", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut current = Maybe::present(black_box(1_i64));
                for _ in 0..length {
                    current = current.bind(|value| Maybe::present(value + 1));
                }
                black_box(current)
            });
        });

        group.bench_with_input(BenchmarkId::new("option_and_then", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut current = Some(black_box(1_i64));
                for _ in 0..length {
                    current = current.and_then(|value| Some(value + 1));
                }
                black_box(current)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Search Chain Benchmarks
// =============================================================================

fn benchmark_search_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("search_chain");
    let numbers: Vec<i32> = (0..1_000).collect();

    group.bench_function("maybe_then_hit", |bencher| {
        bencher.iter(|| {
            black_box(
                find(&numbers, black_box(12))
                    .then(|value| Maybe::present(value + 32))
                    .then(|value| find(&numbers, value))
                    .value_or_default(0),
            )
        });
    });

    group.bench_function("maybe_then_miss", |bencher| {
        bencher.iter(|| {
            black_box(
                find(&numbers, black_box(-12))
                    .then(|value| Maybe::present(value + 32))
                    .then(|value| find(&numbers, value))
                    .value_or_default(0),
            )
        });
    });

    group.finish();
}

// =============================================================================
// Extraction Benchmarks
// =============================================================================

fn benchmark_extraction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("extraction");

    group.bench_function("value_or_default_absent", |bencher| {
        bencher.iter(|| black_box(Maybe::<i32>::absent()).value_or_default(black_box(7)));
    });

    group.bench_function("value_or_fail_absent", |bencher| {
        bencher.iter(|| black_box(Maybe::<i32>::absent()).value_or_fail().is_err());
    });

    group.bench_function("unbox_present", |bencher| {
        bencher.iter(|| black_box(Maybe::present(5)).unbox(|value| value * 2, || 0));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_bind_chain,
    benchmark_search_chain,
    benchmark_extraction
);
criterion_main!(benches);
