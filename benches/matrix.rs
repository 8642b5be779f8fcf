//! Benchmarks for matrix transpose and multiply.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_tabular_ml::matrix::{Matrix, TRANSPOSE_BLOCK};

fn square(n: usize) -> Matrix {
    let data: Vec<f64> = (0..n * n).map(|i| (i % 97) as f64 * 0.25).collect();
    Matrix::from_vec(n, n, data).unwrap()
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_transpose");

    for size in [64usize, 256, 1000].iter() {
        let m = square(*size);
        group.bench_with_input(BenchmarkId::new("blocked", size), size, |b, _| {
            b.iter(|| black_box(&m).transpose());
        });
        group.bench_with_input(BenchmarkId::new("unblocked", size), size, |b, _| {
            b.iter(|| black_box(&m).transpose_blocked(usize::MAX).unwrap());
        });
    }

    group.finish();
}

fn bench_block_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_transpose_block");
    let m = square(1000);

    for block in [8usize, 16, TRANSPOSE_BLOCK, 64, 128].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(block), block, |b, &block| {
            b.iter(|| black_box(&m).transpose_blocked(block).unwrap());
        });
    }

    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_multiply");

    for size in [32usize, 128, 256].iter() {
        let a = square(*size);
        let b_mat = square(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(&a).multiply(black_box(&b_mat)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transpose, bench_block_sizes, bench_multiply);
criterion_main!(benches);
