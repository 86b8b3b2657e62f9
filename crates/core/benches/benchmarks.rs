//! Benchmarks for korstr-core.
//!
//! Run with: `cargo bench -p korstr-core`
//!
//! Results are saved to `target/criterion/` with HTML reports.

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use korstr_core::{format_datetime, format_number, format_period, KorStr};

/// Numbers hitting zero, one, and every myriad unit.
const NUMBERS: &[(&str, u64)] = &[
    ("zero", 0),
    ("small", 1_234),
    ("eok", 120_034_005_678),
    ("max", u64::MAX),
];

fn bench_format_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_number");
    for (name, value) in NUMBERS {
        group.bench_with_input(BenchmarkId::from_parameter(name), value, |b, &v| {
            b.iter(|| format_number(black_box(v), Some("원"), true));
        });
    }
    group.finish();
}

fn bench_format_period(c: &mut Criterion) {
    c.bench_function("format_period", |b| {
        b.iter(|| format_period(black_box(694_861), true));
    });
}

fn bench_format_datetime(c: &mut Criterion) {
    c.bench_function("format_datetime_utc", |b| {
        b.iter(|| format_datetime(black_box(1_700_000_000), &Utc));
    });
}

/// Registry lookup by alias plus formatting.
fn bench_registry(c: &mut Criterion) {
    let korstr = KorStr::new();
    c.bench_function("registry_alias_lookup", |b| {
        b.iter(|| korstr.format(black_box("dur"), black_box(90_061)));
    });
}

criterion_group!(
    benches,
    bench_format_number,
    bench_format_period,
    bench_format_datetime,
    bench_registry
);
criterion_main!(benches);
