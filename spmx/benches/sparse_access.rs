//! Access-pattern benchmarks for the sparse engines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spmx::{Matrix2d, MatrixNd, SparseMatrix};

const SPREAD: i64 = 1_000_000_000;

fn scattered_coords(n: usize) -> Vec<(i64, i64)> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..n)
        .map(|_| (rng.gen_range(-SPREAD..SPREAD), rng.gen_range(-SPREAD..SPREAD)))
        .collect()
}

fn scattered_writes(c: &mut Criterion) {
    let coords = scattered_coords(1_000);
    c.bench_function("matrix2d_scattered_writes_1k", |b| {
        b.iter(|| {
            let mut matrix = Matrix2d::new(0i64);
            for &(row, col) in &coords {
                matrix
                    .set(row, col, (row ^ col) | 1)
                    .expect("cell creation");
            }
            black_box(matrix.nnz())
        });
    });
}

fn read_back(c: &mut Criterion) {
    let coords = scattered_coords(1_000);
    let mut matrix = Matrix2d::new(0i64);
    for &(row, col) in &coords {
        matrix
            .set(row, col, (row ^ col) | 1)
            .expect("cell creation");
    }
    c.bench_function("matrix2d_read_back_1k", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &(row, col) in &coords {
                sum = sum.wrapping_add(matrix.get(row, col));
            }
            black_box(sum)
        });
    });
}

fn iterate_occupied(c: &mut Criterion) {
    let coords = scattered_coords(1_000);
    let mut matrix = Matrix2d::new(0i64);
    for &(row, col) in &coords {
        matrix
            .set(row, col, (row ^ col) | 1)
            .expect("cell creation");
    }
    c.bench_function("matrix2d_iterate_1k", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for triple in matrix.iter() {
                black_box(triple);
                count += 1;
            }
            black_box(count)
        });
    });
}

fn ndim_scattered_writes(c: &mut Criterion) {
    let coords = scattered_coords(1_000);
    c.bench_function("ndim_rank3_scattered_writes_1k", |b| {
        b.iter(|| {
            let mut matrix: MatrixNd<i64, 3> = MatrixNd::zeroed();
            for &(row, col) in &coords {
                matrix
                    .set_at(&[row % 1_000, col, row], (row ^ col) | 1)
                    .expect("cell creation");
            }
            black_box(matrix.nnz())
        });
    });
}

criterion_group!(
    benches,
    scattered_writes,
    read_back,
    iterate_occupied,
    ndim_scattered_writes
);
criterion_main!(benches);
