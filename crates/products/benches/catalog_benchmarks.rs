use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use prodcat_products::pagination::page_size;
use prodcat_products::{
    Category, ProductFilters, ProductInput, ProductRegistry, filter, paginate, summarize,
};
use rust_decimal::Decimal;

fn registry_with(n: usize) -> ProductRegistry {
    let mut registry = ProductRegistry::new();
    for i in 0..n {
        registry.create(ProductInput {
            name: format!("Product {i} {}", if i % 7 == 0 { "Chair" } else { "Lamp" }),
            price: Decimal::new(1000 + i as i64, 2),
            category: Category::ALL[i % Category::ALL.len()],
            stock: (i % 40) as u32,
            description: None,
            is_active: i % 3 != 0,
            tags: vec!["bench".to_string()],
        })
        .unwrap();
    }
    registry
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_apply");
    let filters = ProductFilters::default()
        .with_category(Category::Furniture)
        .with_search("chair")
        .with_active_only(true);

    for size in [100usize, 1_000, 10_000] {
        let registry = registry_with(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &registry, |b, registry| {
            b.iter(|| filter::apply(black_box(registry.list()), black_box(&filters)));
        });
    }
    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    for size in [100usize, 1_000, 10_000] {
        let registry = registry_with(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &registry, |b, registry| {
            b.iter(|| summarize(black_box(registry.list())));
        });
    }
    group.finish();
}

fn bench_filter_then_paginate(c: &mut Criterion) {
    let registry = registry_with(10_000);
    let filters = ProductFilters::default().with_active_only(true);
    let size = page_size(25).unwrap();

    c.bench_function("filter_then_paginate_10k", |b| {
        b.iter(|| {
            let visible = filter::apply(registry.list(), &filters);
            let page = paginate(&visible, black_box(40), size);
            black_box(page.items.len())
        });
    });
}

criterion_group!(benches, bench_filter, bench_summarize, bench_filter_then_paginate);
criterion_main!(benches);
