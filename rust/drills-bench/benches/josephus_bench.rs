//! Criterion benchmarks for the Josephus solver.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use drills_core::josephus::{solve, StepRule};

fn bench_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("josephus_fixed");
    for people in [10usize, 100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(people as u64));
        group.bench_with_input(BenchmarkId::from_parameter(people), &people, |b, &n| {
            b.iter(|| solve(black_box(n), StepRule::fixed(3), n).expect("valid game"));
        });
    }
    group.finish();
}

fn bench_large_steps(c: &mut Criterion) {
    // Steps far beyond the circle size reduce modulo the live count.
    let mut group = c.benchmark_group("josephus_large_step");
    for k in [1i64, 1_000, 1_000_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| solve(1_000, StepRule::alternating(black_box(k), 7), 1_000).expect("valid game"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fixed, bench_large_steps);
criterion_main!(benches);
