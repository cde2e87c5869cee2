use criterion::{criterion_group, criterion_main, Criterion};
use png_to_embed::{parse_header, render_header};
use std::hint::black_box;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Render Header");

    // Set up the test data - 1MB, larger than any sane embedded image
    let size = 1048576;
    let input: Vec<u8> = (0..size).map(|x| (x * 31 % 256) as u8).collect();
    group.throughput(criterion::Throughput::Bytes(size as u64));

    group.bench_function("render_header", |b| {
        b.iter(|| render_header(black_box("g_ImageData"), black_box(&input)))
    });

    let text = render_header("g_ImageData", &input);
    group.bench_function("parse_header", |b| {
        b.iter(|| parse_header(black_box(&text)))
    });

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
