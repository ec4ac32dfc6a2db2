extern crate criterion;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use indexed_min_heap::IndexedMinHeap;

mod generators;
use crate::generators::{
    build_queue, gen_random_priorities, gen_unique_usizes, get_unique_random_strings,
};

pub fn bench_extract_min(c: &mut Criterion) {
    let base_keys = gen_unique_usizes(500_000, 0);
    let base_values = gen_random_priorities(500_000, 7);

    let mut group = c.benchmark_group("extract_min_usize");
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
                    for _ in 0..1000 {
                        black_box(queue.extract_min().unwrap());
                    }
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();

    let mut group = c.benchmark_group("extract_min_string");
    let base_keys = get_unique_random_strings(50_000, 0);
    let base_values = gen_random_priorities(50_000, 7);

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
                    for _ in 0..1000 {
                        black_box(queue.extract_min().unwrap());
                    }
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract_min);
criterion_main!(benches);
