use chrono::{Duration, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use retailiq_inventory::{Overview, ReorderEngine};
use retailiq_products::{Category, Product};

fn catalogue(size: usize) -> Vec<Product> {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
    (0..size)
        .map(|i| Product {
            id: format!("sku-{i}").parse().unwrap(),
            name: format!("Product {i}"),
            category: Category::ALL[i % Category::ALL.len()],
            cost_price: 1.0 + (i % 40) as f64,
            selling_price: 2.0 + (i % 40) as f64 * 1.8,
            expiry_date: now.date_naive() + Duration::days((i % 400) as i64),
            current_stock: (i % 250) as u32,
            avg_daily_sales: (i % 17) as f64 * 0.5,
            last_updated: now,
        })
        .collect()
}

fn bench_analyze_all(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
    let engine = ReorderEngine::new();
    let mut group = c.benchmark_group("reorder");

    for size in [100usize, 1_000, 10_000] {
        let products = catalogue(size);
        group.bench_with_input(BenchmarkId::new("analyze_all", size), &products, |b, ps| {
            b.iter(|| engine.analyze_all(black_box(ps), now).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("overview", size), &products, |b, ps| {
            b.iter(|| Overview::compute(black_box(ps), now))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze_all);
criterion_main!(benches);
