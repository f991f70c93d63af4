use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ut_core::{Criteria, Tolerance};

fn criteria_bench(c: &mut Criterion) {
    let ints: Vec<i64> = (0..4_096).collect();
    let ints_copy = ints.clone();
    let floats: Vec<f64> = (0..4_096i32).map(|i| f64::from(i) * 0.5).collect();
    let shifted: Vec<f64> = floats.iter().map(|value| value + 1.0e-7).collect();
    let nested: Vec<Vec<i64>> = ints.chunks(64).map(<[i64]>::to_vec).collect();
    let nested_copy = nested.clone();
    let inexact = Criteria::inexact(Tolerance::new(1.0e-6).unwrap());

    c.bench_function("exact_int_arrays", |b| {
        b.iter(|| black_box(Criteria::Exact.equals(&ints, &ints_copy)))
    });

    c.bench_function("inexact_float_arrays", |b| {
        b.iter(|| black_box(inexact.equals(&floats, &shifted)))
    });

    c.bench_function("exact_nested_arrays", |b| {
        b.iter(|| black_box(Criteria::Exact.equals(&nested, &nested_copy)))
    });
}

criterion_group!(benches, criteria_bench);
criterion_main!(benches);
