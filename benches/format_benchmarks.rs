//! Performance benchmarks for phone number formatting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phone_display::{format_phone_number, PhoneNumber};

fn bench_format_valid(c: &mut Criterion) {
    c.bench_function("format_valid", |b| {
        b.iter(|| format_phone_number(black_box("4008123123")))
    });
}

fn bench_format_invalid(c: &mut Criterion) {
    c.bench_function("format_invalid", |b| {
        b.iter(|| format_phone_number(black_box("400812312a")))
    });
}

fn bench_parse_display_form(c: &mut Criterion) {
    c.bench_function("parse_display_form", |b| {
        b.iter(|| black_box("400-812-3123").parse::<PhoneNumber>())
    });
}

criterion_group!(
    benches,
    bench_format_valid,
    bench_format_invalid,
    bench_parse_display_form
);
criterion_main!(benches);
