//! Insert benchmarks.
//!
//! 1. **By size**: latency vs capacity (cache effects only, O(k) work)
//! 2. **By FP rate**: lower rate means more rounds per insert
//! 3. **By item length**: hashing cost vs input size
//! 4. **By hash pair**: XXH3/XXH64 vs SipHash-1-3
//! 5. **Batch**: `insert_batch` throughput

use bloomset::{BloomFilter, SipHashPair, XxHashPair};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

mod common;
use common::*;

fn bench_insert_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_by_size");

    for &size in SIZES {
        let items = generate_strings(10_000, 32);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let filter = BloomFilter::new(size, 0.01).unwrap();
            let mut idx = 0;

            b.iter(|| {
                filter.insert(black_box(&items[idx % items.len()]));
                idx += 1;
            });
        });
    }

    group.finish();
}

fn bench_insert_by_fp_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_by_fp_rate");
    let items = generate_sequential_strings(10_000);

    for &fp in FP_RATES {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(fp), &fp, |b, &fp| {
            let filter = BloomFilter::new(100_000, fp).unwrap();
            let mut idx = 0;

            b.iter(|| {
                filter.insert(black_box(&items[idx % items.len()]));
                idx += 1;
            });
        });
    }

    group.finish();
}

fn bench_insert_by_item_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_by_item_length");

    for &len in ITEM_LENGTHS {
        let items = generate_strings(1_000, len);

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            let filter = BloomFilter::new(100_000, 0.01).unwrap();
            let mut idx = 0;

            b.iter(|| {
                filter.insert(black_box(&items[idx % items.len()]));
                idx += 1;
            });
        });
    }

    group.finish();
}

fn bench_insert_by_hash_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_by_hash_pair");
    let keys = generate_u64_keys(10_000);
    group.throughput(Throughput::Elements(1));

    group.bench_function("xxhash", |b| {
        let filter = BloomFilter::with_hasher(100_000, 0.01, XxHashPair::new()).unwrap();
        let mut idx = 0;
        b.iter(|| {
            filter.insert(black_box(&keys[idx % keys.len()]));
            idx += 1;
        });
    });

    group.bench_function("siphash", |b| {
        let filter = BloomFilter::with_hasher(100_000, 0.01, SipHashPair::new()).unwrap();
        let mut idx = 0;
        b.iter(|| {
            filter.insert(black_box(&keys[idx % keys.len()]));
            idx += 1;
        });
    });

    group.finish();
}

fn bench_insert_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_batch");

    for &count in &[100usize, 1_000, 10_000] {
        let items = generate_strings(count, 32);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            let filter = BloomFilter::new(100_000, 0.01).unwrap();
            b.iter(|| filter.insert_batch(black_box(&items)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_by_size,
    bench_insert_by_fp_rate,
    bench_insert_by_item_length,
    bench_insert_by_hash_pair,
    bench_insert_batch,
);
criterion_main!(benches);
