use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdfobj::{Array, Dict, FaultPolicy, IndirectRef, Object, XRefTable};

fn page_tree(kids: usize) -> Array {
    (0..kids)
        .map(|i| {
            let mut page = Dict::new();
            page.insert("Type", Object::name("Page"));
            page.insert("Parent", Object::reference(1, 0));
            page.insert("MediaBox", Object::Array(Array::from_integers([0, 0, 612, 792])));
            page.insert("Rotate", Object::Integer((i % 4) as i64 * 90));
            Object::Dict(page)
        })
        .collect()
}

fn benchmark_canonical(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_string");
    for size in [10, 100, 1000] {
        let flat = Array::from_reals((0..size).map(|i| i as f64 * 0.25));
        group.bench_with_input(BenchmarkId::new("reals", size), &flat, |b, array| {
            b.iter(|| black_box(array).canonical_string_with(&FaultPolicy::Panic))
        });

        let pages = page_tree(size);
        group.bench_with_input(BenchmarkId::new("pages", size), &pages, |b, array| {
            b.iter(|| black_box(array).canonical_string_with(&FaultPolicy::Panic))
        });
    }
    group.finish();
}

fn benchmark_debug(c: &mut Criterion) {
    let pages = page_tree(100);
    c.bench_function("debug_string_pages_100", |b| {
        b.iter(|| black_box(&pages).debug_string())
    });
}

fn benchmark_contains(c: &mut Criterion) {
    let mut table = XRefTable::new();
    for n in 0..1000u32 {
        table.insert(IndirectRef::new(n, 0), Object::Integer(n as i64));
    }
    let references: Array = (0..1000u32).map(|n| Object::reference(n, 0)).collect();
    let last = Object::Integer(999);

    c.bench_function("contains_resolved_last", |b| {
        b.iter(|| references.contains(black_box(&last), &table))
    });
}

criterion_group!(benches, benchmark_canonical, benchmark_debug, benchmark_contains);
criterion_main!(benches);
