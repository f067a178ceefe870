//! Producer benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use seqbench::{rows_eager, rows_lazy, squares_eager, squares_lazy};

fn bench_square_producers(c: &mut Criterion) {
    let mut group = c.benchmark_group("squares");

    for size in [10_000u64, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("eager", size), &size, |b, &n| {
            b.iter(|| {
                let values = squares_eager(black_box(n));
                black_box(values.iter().fold(0u128, |acc, &v| acc + u128::from(v)))
            });
        });

        group.bench_with_input(BenchmarkId::new("lazy", size), &size, |b, &n| {
            b.iter(|| {
                black_box(
                    squares_lazy(black_box(n)).fold(0u128, |acc, v| acc + u128::from(v)),
                )
            });
        });
    }

    group.finish();
}

fn bench_row_producers(c: &mut Criterion) {
    let mut group = c.benchmark_group("rows");

    for size in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("eager", size), &size, |b, &n| {
            b.iter(|| {
                let rows = rows_eager(black_box(n));
                for row in &rows {
                    black_box(row);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("lazy", size), &size, |b, &n| {
            b.iter(|| {
                for row in rows_lazy(black_box(n)) {
                    black_box(&row);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_square_producers, bench_row_producers);
criterion_main!(benches);
