//! Benchmarks for tag generation and matching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use etag_core::{decode, encode, if_none_match, Options};

fn generate_test_data(size: usize) -> Vec<u8> {
    let text = "Hello, World! This is test data for entity tag benchmarks. ";
    text.repeat(size / text.len() + 1).into_bytes()[..size].to_vec()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [1024, 10240, 102400].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("strong", size), &data, |b, data| {
            b.iter(|| encode(black_box(data), Options::default()))
        });

        group.bench_with_input(BenchmarkId::new("weak", size), &data, |b, data| {
            b.iter(|| encode(black_box(data), Options::weak()))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let tag = encode("deno911", false);
    c.bench_function("decode_content_tag", |b| b.iter(|| decode(black_box(&tag))));
    c.bench_function("decode_stat_tag", |b| {
        b.iter(|| decode(black_box("W/\"14-18a2f3\"")))
    });
}

fn bench_if_none_match(c: &mut Criterion) {
    let data = generate_test_data(10240);
    let header: String = (0..16)
        .map(|i| format!("\"{i:x}-not-a-match\""))
        .collect::<Vec<_>>()
        .join(", ");

    c.bench_function("if_none_match_16_candidates", |b| {
        b.iter(|| if_none_match(black_box(&header), black_box(&data), false))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_if_none_match);
criterion_main!(benches);
