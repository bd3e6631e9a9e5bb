use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use sortkit::RunOrder;
use sortkit::natural::natural_sort_with;
use std::hint::black_box;

fn bench_file_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("Natural Sort");
    group.sample_size(10);

    // Names like "report-17-v3.txt": several digit runs per key
    let mut rng = rand::rng();
    let count = 100_000;

    let names: Vec<String> = (0..count)
        .map(|_| {
            format!(
                "report-{}-v{}.txt",
                rng.random_range(0..5_000),
                rng.random_range(0..20)
            )
        })
        .collect();

    let total_bytes: usize = names.iter().map(|s| s.len()).sum();
    group.throughput(Throughput::Bytes(total_bytes as u64));

    for order in [RunOrder::Lexicographic, RunOrder::Legacy] {
        group.bench_function(format!("natural sort ({order})"), |b| {
            b.iter_batched(
                || names.clone(),
                |data| natural_sort_with(black_box(data), |s| s.clone(), order),
                BatchSize::LargeInput,
            )
        });
    }

    // Plain string order, for reference
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || names.clone(),
            |mut data| data.sort(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_file_names);
criterion_main!(benches);
