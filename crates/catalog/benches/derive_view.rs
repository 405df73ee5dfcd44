use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use storefront_catalog::{CategoryFilter, Criteria, PriceRange, Product, SortOrder, derive_view};
use storefront_core::ProductId;

const CATEGORIES: [&str; 4] = ["Electronics", "Kitchen", "Books", "Garden"];

fn catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| {
            Product::new(ProductId::new(i as u64), format!("Product {}", size - i))
                .with_price(((i * 7919) % 60_000) as f64)
                .with_category(CATEGORIES[i % CATEGORIES.len()])
                .with_rating((i % 6) as i64)
        })
        .collect()
}

fn bench_derive_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_view");

    let criteria = [
        ("noop", Criteria::default()),
        ("search", Criteria::default().with_search("product 1")),
        (
            "filtered_price_desc",
            Criteria::default()
                .with_category(CategoryFilter::only("Kitchen"))
                .with_price(PriceRange::between(1000.0, 20000.0))
                .with_sort(SortOrder::PriceDescending),
        ),
        ("name_sort", Criteria::default().with_sort(SortOrder::NameAscending)),
    ];

    for size in [100usize, 1_000, 10_000] {
        let products = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        for (name, criteria) in &criteria {
            group.bench_with_input(BenchmarkId::new(*name, size), &products, |b, products| {
                b.iter(|| derive_view(black_box(products), black_box(criteria)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_derive_view);
criterion_main!(benches);
