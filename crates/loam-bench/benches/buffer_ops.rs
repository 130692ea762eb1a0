//! Criterion micro-benchmarks for the raw buffer primitive.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loam_buffer::Buffer;

fn bench_alloc(c: &mut Criterion) {
    c.bench_function("buffer_with_len_4k", |b| {
        b.iter(|| black_box(Buffer::<u64>::with_len(4_096)))
    });
}

fn bench_swap(c: &mut Criterion) {
    c.bench_function("buffer_swap", |b| {
        let mut x = Buffer::<u64>::with_len(4_096);
        let mut y = Buffer::<u64>::new();
        b.iter(|| {
            x.swap(&mut y);
            black_box(x.is_allocated())
        })
    });
}

criterion_group!(benches, bench_alloc, bench_swap);
criterion_main!(benches);
