use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, Utc};
use souq_catalog::{NewCategory, NewProduct, ProductSort};
use souq_core::{CategoryId, LocalizedText, ProductId, UserId};
use souq_engine::{CatalogQuery, CategoryFilter, ConsistencyMode, PageRequest};
use souq_store::{CategoryStore, MemoryCatalogStore, ProductStore};
use std::sync::Arc;

fn seed_store(products: usize) -> Arc<MemoryCatalogStore> {
    let store = Arc::new(MemoryCatalogStore::new());
    let base = Utc::now();

    let category = NewCategory {
        name: LocalizedText::new("Electronics", "إلكترونيات"),
        slug: None,
        is_active: None,
    }
    .into_category(CategoryId::new(), base)
    .unwrap();
    let category_id = category.id;
    store.insert_category(category).unwrap();

    for i in 0..products {
        let product = NewProduct {
            name: LocalizedText::new(format!("Item {i:05}"), format!("عنصر {i:05}")),
            description: LocalizedText::new("benchmark item", "عنصر قياس"),
            slug: None,
            price: (i % 997) as f64 + 0.99,
            image: "https://example.com/item.jpg".to_string(),
            category: category_id,
            is_active: None,
        }
        .into_product(
            ProductId::new(),
            UserId::new(),
            base + Duration::seconds(i as i64),
        )
        .unwrap();
        store.insert_product(product).unwrap();
    }

    store
}

fn bench_list_first_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_first_page");

    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        let query = CatalogQuery::new(seed_store(size));

        group.bench_with_input(BenchmarkId::new("price_high", size), &size, |b, _| {
            let request = PageRequest {
                sort: ProductSort::PriceHigh,
                ..Default::default()
            };
            b.iter(|| black_box(query.list_products(&request).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("newest", size), &size, |b, _| {
            let request = PageRequest::default();
            b.iter(|| black_box(query.list_products(&request).unwrap()));
        });
    }

    group.finish();
}

fn bench_consistency_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("consistency_modes");
    group.sample_size(200);

    let query = CatalogQuery::new(seed_store(5_000));

    for (label, consistency) in [
        ("weak_count_plus_fetch", ConsistencyMode::Weak),
        ("snapshot_single_pass", ConsistencyMode::Snapshot),
    ] {
        group.bench_function(label, |b| {
            let request = PageRequest {
                page: 10,
                limit: 50,
                sort: ProductSort::NameAsc,
                consistency,
                ..Default::default()
            };
            b.iter(|| black_box(query.list_products(&request).unwrap()));
        });
    }

    group.finish();
}

fn bench_category_filtered_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_filtered_listing");

    let query = CatalogQuery::new(seed_store(5_000));
    let filter = CategoryFilter {
        lang: souq_core::Lang::En,
        slug: "electronics".to_string(),
    };

    group.bench_function("slug_resolved_page", |b| {
        let request = PageRequest {
            category: Some(filter.clone()),
            limit: 20,
            ..Default::default()
        };
        b.iter(|| black_box(query.list_products(&request).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_list_first_page,
    bench_consistency_modes,
    bench_category_filtered_listing
);
criterion_main!(benches);
