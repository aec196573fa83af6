use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use hyperjson::{ParseConfig, Reviver, from_value, normalize_query, parse_str};

fn catalog(size: usize) -> String {
    let items: Vec<String> = (0..size)
        .map(|i| {
            format!(
                r##"{{"href": "/items/{i}?sort=desc&page={i}&lang=en", "name": "item-{i}", "tags": ["a", "b", {i}], "owner": {{"href": "#/owners/{i}"}}}}"##
            )
        })
        .collect();
    format!(
        r#"{{"href": "/catalog", "items": {{"collection": [{}]}}, "meta": {{"data": {{"count": {size}}}}}}}"#,
        items.join(",")
    )
}

fn parse_bench(c: &mut Criterion) {
    let cfg = ParseConfig::default();
    let mut group = c.benchmark_group("parse_str");

    for size in [16, 256, 4096] {
        let text = catalog(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("items_{size}"), |b| {
            b.iter(|| {
                parse_str(black_box(&text), "http://bench.example.com", &cfg)
                    .expect("bench document parses")
            })
        });
    }

    group.finish();
}

fn revive_bench(c: &mut Criterion) {
    let value: serde_json::Value =
        serde_json::from_str(&catalog(1024)).expect("bench document is valid json");
    let reviver = Reviver::new("http://bench.example.com");

    c.bench_function("from_value_1024", |b| {
        b.iter(|| from_value(black_box(value.clone()), &reviver))
    });
}

fn query_bench(c: &mut Criterion) {
    c.bench_function("normalize_query", |b| {
        b.iter(|| {
            normalize_query(black_box(
                "/search?q=rust&sort=desc&page=3&lang=en&limit=50#top",
            ))
        })
    });
}

criterion_group!(pipeline_benches, parse_bench, revive_bench, query_bench);
criterion_main!(pipeline_benches);
