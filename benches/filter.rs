use criterion::{Criterion, black_box, criterion_group, criterion_main};
use htmlref::catalog;
use htmlref::filter::{CategoryFilter, filter_entries};

fn bench_filter(c: &mut Criterion) {
    let entries = catalog::entries();

    c.bench_function("filter_empty_query", |b| {
        b.iter(|| filter_entries(black_box(entries), black_box(""), &CategoryFilter::All))
    });

    c.bench_function("filter_substring", |b| {
        b.iter(|| filter_entries(black_box(entries), black_box("tabela"), &CategoryFilter::All))
    });

    c.bench_function("filter_category_only", |b| {
        let category = CategoryFilter::Named("Formulários".to_string());
        b.iter(|| filter_entries(black_box(entries), black_box(""), &category))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
