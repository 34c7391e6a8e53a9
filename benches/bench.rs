use criterion::{criterion_group, criterion_main, Criterion};

use regexp_scalar::{regexp_count, regexp_position, regexp_replace, regexp_split, Pattern};

fn haystack() -> String {
    "lorem ipsum 42 dolor sit 7 amet, consectetur 1999 adipiscing elit "
        .repeat(64)
}

fn bench_count(c: &mut Criterion) {
    let digits = Pattern::new("[0-9]+").unwrap();
    let empty = Pattern::new("").unwrap();
    let text = haystack();
    c.bench_function("count digits", |b| {
        b.iter(|| regexp_count(&text, &digits))
    });
    c.bench_function("count empty pattern", |b| {
        b.iter(|| regexp_count(&text, &empty))
    });
}

fn bench_replace(c: &mut Criterion) {
    let digits = Pattern::new("[0-9]+").unwrap();
    let text = haystack();
    c.bench_function("replace digits", |b| {
        b.iter(|| regexp_replace(&text, &digits, "#"))
    });
}

fn bench_split(c: &mut Criterion) {
    let spaces = Pattern::new(" +").unwrap();
    let text = haystack();
    c.bench_function("split on spaces", |b| {
        b.iter(|| regexp_split(&text, &spaces))
    });
}

fn bench_position(c: &mut Criterion) {
    let digits = Pattern::new("[0-9]+").unwrap();
    let text = haystack();
    c.bench_function("position of 50th number", |b| {
        b.iter(|| regexp_position(&text, &digits, 1, 50))
    });
}

criterion_group!(
    benches,
    bench_count,
    bench_replace,
    bench_split,
    bench_position
);
criterion_main!(benches);
