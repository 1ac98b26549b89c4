use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use core_suit::{render, render_table_body};
use core_suit_model::escape_html;
use core_suit_store::{decode_collection, encode_collection};
use core_suit_testkit::sample_records;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for size in [10usize, 100, 1000] {
        let records = sample_records(size);
        group.bench_with_input(BenchmarkId::new("rows", size), &records, |b, records| {
            b.iter(|| render(black_box(records)))
        });
        let rows = render(&records);
        group.bench_with_input(BenchmarkId::new("table_body", size), &rows, |b, rows| {
            b.iter(|| render_table_body(black_box(rows)))
        });
    }
    group.finish();
}

fn bench_escape(c: &mut Criterion) {
    c.bench_function("escape_plain", |b| {
        b.iter(|| escape_html(black_box("Conductive Suit CS-001")))
    });
    c.bench_function("escape_markup", |b| {
        b.iter(|| escape_html(black_box("<script>alert('x')</script> & \"more\"")))
    });
}

fn bench_payload(c: &mut Criterion) {
    let records = sample_records(500);
    let payload = encode_collection(&records).unwrap();
    c.bench_function("decode_500", |b| {
        b.iter(|| decode_collection(black_box(&payload)).unwrap())
    });
}

criterion_group!(benches, bench_render, bench_escape, bench_payload);
criterion_main!(benches);
