//! Criterion micro-benchmarks for the arithmetic helpers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use primer_test_utils::filled_buffer;

fn bench_factorial(c: &mut Criterion) {
    c.bench_function("factorial_6", |b| {
        b.iter(|| primer_ops::factorial(black_box(6)))
    });
    c.bench_function("factorial_10k_wrapping", |b| {
        b.iter(|| primer_ops::factorial(black_box(10_000)))
    });
}

fn bench_fib_variant(c: &mut Criterion) {
    c.bench_function("fib_variant_8", |b| {
        b.iter(|| primer_ops::fib_variant(black_box(8)))
    });
    c.bench_function("fib_variant_90", |b| {
        b.iter(|| primer_ops::fib_variant(black_box(90)))
    });
}

/// Benchmark: sum and copy of a 1M-element buffer.
fn bench_buffer_1m(c: &mut Criterion) {
    let buffer = filled_buffer(1 << 20, 14);
    c.bench_function("sum_buffer_1m", |b| {
        b.iter(|| primer_ops::sum_buffer(black_box(&buffer), buffer.len()))
    });
    c.bench_function("copy_buffer_1m", |b| {
        b.iter(|| primer_ops::copy_buffer(black_box(&buffer), buffer.len()))
    });
}

criterion_group!(benches, bench_factorial, bench_fib_variant, bench_buffer_1m);
criterion_main!(benches);
