//! Benchmarks for the Phonex encoder

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use phonex_core::{code_name, encode, encode_all};

const NAMES: &[&str] = &[
    "Catherine",
    "Knight",
    "Hammerschlag",
    "Meyer-Lansky",
    "Kristopherson",
    "Émile",
];

fn bench_single_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for name in NAMES {
        group.throughput(Throughput::Bytes(name.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| encode(black_box(name)))
        });
    }

    group.finish();
}

fn bench_coding_pass(c: &mut Criterion) {
    let input = "ammerschlag";

    let mut group = c.benchmark_group("coder");
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("code_name", |b| b.iter(|| code_name(black_box(input))));

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let names: Vec<String> = (0..10_000)
        .map(|i| format!("{}{}", NAMES[i % NAMES.len()], "s".repeat(i % 3)))
        .collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(names.len() as u64));

    group.bench_function("encode_all_10k", |b| {
        b.iter(|| encode_all(black_box(names.as_slice())))
    });

    group.finish();
}

criterion_group!(benches, bench_single_names, bench_coding_pass, bench_batch);
criterion_main!(benches);
