
use config_generator::generate_config;
use criterion::{criterion_group, criterion_main, Criterion};
use tinyconf::Config;

fn parsing_benchmarks(c: &mut Criterion) {
    // Generate configs of different sizes
    let small = generate_config(50);
    let medium = generate_config(300);
    let large = generate_config(1_000);
    let xlarge = generate_config(10_000);

    let mut group = c.benchmark_group("parsing");

    group.bench_function("small_50_lines", |b| {
        b.iter(|| small.parse::<Config>().unwrap())
    });

    group.bench_function("medium_300_lines", |b| {
        b.iter(|| medium.parse::<Config>().unwrap())
    });

    group.bench_function("large_1000_lines", |b| {
        b.iter(|| large.parse::<Config>().unwrap())
    });

    group.bench_function("xlarge_10000_lines", |b| {
        b.iter(|| xlarge.parse::<Config>().unwrap())
    });

    group.bench_function("tokenize_only_1000_lines", |b| {
        b.iter(|| tinyconf::tokenize(&large).unwrap().len())
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmarks);
criterion_main!(benches);
