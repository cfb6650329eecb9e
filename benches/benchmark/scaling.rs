use crate::common::configure_criterion;
use criterion::{criterion_group, BenchmarkId, Criterion, Throughput};
use schema_rail::prelude::*;
use std::hint::black_box;

pub fn bench_array_length_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/array_of");

    for size in [10, 100, 1000, 5000] {
        let input: Value = (0..size).map(|i| Value::from(format!("item_{i}"))).collect::<Table>().into();
        let plain = array_of(string());
        let unique = array_of(string()).unique();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("plain", size), &input, |b, input| {
            b.iter(|| black_box(plain.validate(input)))
        });
        group.bench_with_input(BenchmarkId::new("unique", size), &input, |b, input| {
            b.iter(|| black_box(unique.validate(input)))
        });
    }

    group.finish();
}

pub fn bench_nesting_depth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/nesting_depth");

    for depth in [1, 5, 10, 20, 50] {
        let mut schema: Validator = number().into();
        let mut input = Value::from(1);
        for _ in 0..depth {
            schema = map().field("inner", schema).into();
            input = table! { "inner" => input };
        }
        let mut broken = Value::from("leaf");
        for _ in 0..depth {
            broken = table! { "inner" => broken };
        }

        group.bench_with_input(BenchmarkId::new("valid", depth), &depth, |b, _| {
            b.iter(|| black_box(schema.validate(&input)))
        });
        group.bench_with_input(BenchmarkId::new("invalid_leaf", depth), &depth, |b, _| {
            b.iter(|| black_box(schema.validate(&broken)))
        });
    }

    group.finish();
}

criterion_group! {
    name = scaling_benches;
    config = configure_criterion();
    targets =
        bench_array_length_scaling,
        bench_nesting_depth_scaling,
}
