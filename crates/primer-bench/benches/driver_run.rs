//! Criterion benchmarks for complete driver runs with output discarded.

use criterion::{criterion_group, criterion_main, Criterion};
use primer_bench::{reference_profile, stress_profile};
use primer_engine::Driver;

fn bench_reference_run(c: &mut Criterion) {
    let driver = Driver::new(reference_profile()).unwrap();
    c.bench_function("driver_reference_run", |b| {
        b.iter(|| driver.run(&mut std::io::sink()).unwrap())
    });
}

fn bench_stress_run(c: &mut Criterion) {
    let driver = Driver::new(stress_profile()).unwrap();
    let mut group = c.benchmark_group("driver_stress");
    group.sample_size(10);
    group.bench_function("run", |b| {
        b.iter(|| driver.run(&mut std::io::sink()).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_reference_run, bench_stress_run);
criterion_main!(benches);
