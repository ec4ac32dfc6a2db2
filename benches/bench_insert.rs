extern crate criterion;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use indexed_min_heap::IndexedMinHeap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

mod generators;
use crate::generators::{
    build_queue, gen_random_priorities, gen_unique_usizes, generate_worst_insert_data,
    get_unique_random_strings,
};

type FxBuildHasher = BuildHasherDefault<FxHasher>;

pub fn bench_insert(c: &mut Criterion) {
    let all_keys = gen_unique_usizes(501_000, 0);
    let (base_keys, extra_keys) = all_keys.split_at(500_000);
    let base_values = gen_random_priorities(500_000, 7);
    let extra_values = gen_random_priorities(1000, 20);

    let mut group = c.benchmark_group("insert_usizes_random");
    for &size in &[100_000, 200_000, 300_000, 400_000, 500_000] {
        assert!(base_keys.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue = build_queue(
                &base_keys[..size],
                &base_values[..size],
                IndexedMinHeap::new(),
            );
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for (&k, &v) in extra_keys.iter().zip(extra_values.iter()) {
                        queue.insert(k, v).unwrap();
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    let mut group = c.benchmark_group("insert_usizes_random_fx");
    for &size in &[100_000, 500_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue = build_queue(
                &base_keys[..size],
                &base_values[..size],
                IndexedMinHeap::with_hasher(FxBuildHasher::default()),
            );
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for (&k, &v) in extra_keys.iter().zip(extra_values.iter()) {
                        queue.insert(k, v).unwrap();
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    let all_values = gen_random_priorities(520_000, 7);
    let all_keys = gen_unique_usizes(520_000, 3);
    let (base_keys, extra_keys) = all_keys.split_at(500_000);
    let (base_values, extra_values) = generate_worst_insert_data(all_values, 20_000, 987987);

    let mut group = c.benchmark_group("insert_usizes_worst");
    for &size in &[100_000, 200_000, 300_000, 400_000, 500_000] {
        assert!(base_keys.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue = build_queue(
                &base_keys[..size],
                &base_values[..size],
                IndexedMinHeap::new(),
            );
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for (&k, &v) in extra_keys.iter().zip(extra_values.iter()) {
                        queue.insert(k, v).unwrap();
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    let all_keys = get_unique_random_strings(51_000, 987987);
    let (base_keys, extra_keys) = all_keys.split_at(50_000);
    let base_values = gen_random_priorities(50_000, 23423);
    let extra_values = gen_random_priorities(1000, 8);

    let mut group = c.benchmark_group("insert_strings_random");
    for &size in &[10_000, 20_000, 30_000, 40_000, 50_000] {
        assert!(base_keys.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue = build_queue(
                &base_keys[..size],
                &base_values[..size],
                IndexedMinHeap::new(),
            );
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for (k, &v) in extra_keys.iter().zip(extra_values.iter()) {
                        queue.insert(k.clone(), v).unwrap();
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert);
criterion_main!(benches);
