use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use utf8conv::{ConversionRange, Converter};

fn sample_text() -> String {
    "Ciao ciao, gªrçon \u{91D1} \u{1F600}\n".repeat(256)
}

fn bench_utf16_from_utf8(c: &mut Criterion) {
    let conv = Converter::new();
    let text = sample_text();

    c.bench_function("utf16_from_utf8", |b| {
        b.iter(|| conv.utf16_from_utf8(black_box(&text)))
    });

    c.bench_function("utf16_from_utf8_range", |b| {
        let bytes = text.as_bytes();
        b.iter(|| conv.utf16_from_utf8_range(black_box(ConversionRange::new(&bytes[..64]))))
    });
}

fn bench_utf8_from_utf16(c: &mut Criterion) {
    let conv = Converter::new();
    let units: Vec<u16> = sample_text().encode_utf16().collect();

    c.bench_function("utf8_from_utf16", |b| {
        b.iter(|| conv.utf8_from_utf16(black_box(&units)))
    });

    c.bench_function("utf8_from_utf16_invalid", |b| {
        let mut bad = units.clone();
        bad.push(0xD800);
        b.iter(|| conv.utf8_from_utf16(black_box(&bad)))
    });
}

criterion_group!(benches, bench_utf16_from_utf8, bench_utf8_from_utf16);
criterion_main!(benches);
