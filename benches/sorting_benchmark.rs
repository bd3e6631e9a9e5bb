use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;
use sortkit::prelude::*;
use std::hint::black_box;

fn bench_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random Numbers");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 2_000;
    let input: Vec<i64> = (0..count).map(|_| rng.random()).collect();

    for algorithm in Algorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(algorithm), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |data| algorithm.sort_by(black_box(data), |a, b| a.cmp(b)),
                BatchSize::SmallInput,
            )
        });
    }

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_default_comparator(c: &mut Criterion) {
    let mut group = c.benchmark_group("Default Comparator");
    group.sample_size(10);

    // Mixed values, compared by their string form
    let mut rng = rand::rng();
    let count = 2_000;
    let input: Vec<Value> = (0..count)
        .map(|i| match i % 4 {
            0 => Value::from(rng.random_range(-1000..1000i32)),
            1 => Value::Number(rng.random::<f64>()),
            2 => Value::from(format!("s{}", rng.random::<u16>())),
            _ => Value::Undefined,
        })
        .collect();

    for algorithm in [Algorithm::Shell, Algorithm::Comb, Algorithm::Merge, Algorithm::Heap, Algorithm::Quick] {
        group.bench_with_input(BenchmarkId::from_parameter(algorithm), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |data| algorithm.sort(black_box(data)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_harness(c: &mut Criterion) {
    let mut group = c.benchmark_group("Benchmark Harness");
    group.sample_size(10);

    let mut rng = rand::rng();
    let input: Vec<u32> = (0..500).map(|_| rng.random()).collect();

    group.bench_function("SortBenchmark::run_by", |b| {
        let bench = SortBenchmark::new();
        b.iter(|| bench.run_by(black_box(&input), |a, b| a.cmp(b)))
    });

    group.bench_function("CloneBenchmark::run", |b| {
        let bench = CloneBenchmark::new();
        b.iter(|| bench.run(black_box(&input)))
    });

    group.finish();
}

criterion_group!(benches, bench_numbers, bench_default_comparator, bench_harness);
criterion_main!(benches);
