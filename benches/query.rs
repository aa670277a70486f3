//! Query (contains) benchmarks.
//!
//! Misses can stop at the first unset bit; hits always walk all `k`
//! rounds, so the two are measured separately.

use bloomset::BloomFilter;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

mod common;
use common::*;

fn loaded_filter(size: u64, fp: f64, items: &[String]) -> BloomFilter {
    let filter = BloomFilter::new(size, fp).unwrap();
    filter.insert_batch(items);
    filter
}

fn bench_query_hit_vs_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_hit_vs_miss");

    for &size in SIZES {
        let present = generate_sequential_strings(size as usize);
        let absent = generate_strings(10_000, 24);
        let filter = loaded_filter(size, 0.01, &present);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("hit", size), &size, |b, _| {
            let mut idx = 0;
            b.iter(|| {
                let found = filter.contains(black_box(&present[idx % present.len()]));
                idx += 1;
                found
            });
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &size, |b, _| {
            let mut idx = 0;
            b.iter(|| {
                let found = filter.contains(black_box(&absent[idx % absent.len()]));
                idx += 1;
                found
            });
        });
    }

    group.finish();
}

fn bench_query_by_fp_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_by_fp_rate");
    let present = generate_sequential_strings(10_000);

    for &fp in FP_RATES {
        let filter = loaded_filter(10_000, fp, &present);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(fp), &fp, |b, _| {
            let mut idx = 0;
            b.iter(|| {
                let found = filter.contains(black_box(&present[idx % present.len()]));
                idx += 1;
                found
            });
        });
    }

    group.finish();
}

fn bench_contains_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_batch");
    let present = generate_sequential_strings(10_000);
    let filter = loaded_filter(10_000, 0.01, &present);

    for &count in &[100usize, 1_000, 10_000] {
        let probes = generate_strings(count, 24);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| filter.contains_batch(black_box(&probes)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_query_hit_vs_miss,
    bench_query_by_fp_rate,
    bench_contains_batch,
);
criterion_main!(benches);
