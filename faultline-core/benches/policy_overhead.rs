//! Benchmark comparing both policies against a hand-written `Result`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use faultline::{
    catch_fault, make_failure, success, FaultFactory, Policy, Raise, ResolvedReturn, Return,
    RuntimeFault,
};
use std::hint::black_box;

#[derive(Debug)]
struct DivideByZero;

impl FaultFactory for DivideByZero {
    type Args = ();
    type Fault = RuntimeFault;

    fn fault(_: ()) -> RuntimeFault {
        RuntimeFault::new("Division by Zero")
    }

    fn from_args(_: ()) -> Self {
        DivideByZero
    }
}

fn divide<P: Policy>(numerator: i64, denominator: i64) -> ResolvedReturn<f64, DivideByZero, P> {
    if denominator == 0 {
        return make_failure::<f64, DivideByZero, P>(());
    }
    success::<f64, DivideByZero, P>(numerator as f64 / denominator as f64)
}

fn divide_baseline(numerator: i64, denominator: i64) -> Result<f64, DivideByZero> {
    if denominator == 0 {
        return Err(DivideByZero);
    }
    Ok(numerator as f64 / denominator as f64)
}

fn benchmark_success_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("success_path");

    for denominator in [1_i64, 7, 1024].iter() {
        group.bench_with_input(
            BenchmarkId::new("baseline", denominator),
            denominator,
            |b, &d| b.iter(|| divide_baseline(black_box(1), black_box(d))),
        );
        group.bench_with_input(BenchmarkId::new("return", denominator), denominator, |b, &d| {
            b.iter(|| divide::<Return>(black_box(1), black_box(d)))
        });
        group.bench_with_input(BenchmarkId::new("raise", denominator), denominator, |b, &d| {
            b.iter(|| divide::<Raise>(black_box(1), black_box(d)))
        });
    }

    group.finish();
}

fn benchmark_failure_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("failure_path");

    group.bench_function("baseline", |b| {
        b.iter(|| divide_baseline(black_box(1), black_box(0)))
    });
    group.bench_function("return", |b| {
        b.iter(|| divide::<Return>(black_box(1), black_box(0)))
    });
    group.bench_function("raise", |b| {
        b.iter(|| catch_fault(|| divide::<Raise>(black_box(1), black_box(0))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_success_path, benchmark_failure_path);
criterion_main!(benches);
