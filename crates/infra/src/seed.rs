//! Demo catalogue loaded when storage has never been written.

use chrono::{NaiveDate, TimeZone, Utc};

use retailiq_core::{DomainError, DomainResult};
use retailiq_products::{Category, Product};

struct SeedRow {
    id: &'static str,
    name: &'static str,
    category: Category,
    cost_price: f64,
    selling_price: f64,
    expiry: (i32, u32, u32),
    current_stock: u32,
    avg_daily_sales: f64,
}

const SEED: [SeedRow; 15] = [
    SeedRow { id: "1", name: "Fresh Milk 1L", category: Category::Food, cost_price: 1.2, selling_price: 2.5, expiry: (2025, 5, 15), current_stock: 45, avg_daily_sales: 12.0 },
    SeedRow { id: "2", name: "Smart Toaster X1", category: Category::Appliances, cost_price: 25.0, selling_price: 55.0, expiry: (2030, 1, 1), current_stock: 12, avg_daily_sales: 1.0 },
    SeedRow { id: "3", name: "L-Shape Velvet Sofa", category: Category::Furniture, cost_price: 450.0, selling_price: 899.0, expiry: (2040, 1, 1), current_stock: 3, avg_daily_sales: 0.1 },
    SeedRow { id: "4", name: "Wireless Gaming Mouse", category: Category::Electronics, cost_price: 15.0, selling_price: 45.0, expiry: (2030, 1, 1), current_stock: 25, avg_daily_sales: 3.0 },
    SeedRow { id: "5", name: "Hydrating Moisturizer", category: Category::Cosmetics, cost_price: 8.0, selling_price: 22.0, expiry: (2026, 6, 1), current_stock: 40, avg_daily_sales: 4.0 },
    SeedRow { id: "6", name: "Hardcover Notebook", category: Category::Stationery, cost_price: 1.0, selling_price: 3.5, expiry: (2030, 1, 1), current_stock: 100, avg_daily_sales: 10.0 },
    SeedRow { id: "7", name: "Roasted Coffee Beans", category: Category::Beverages, cost_price: 12.0, selling_price: 28.0, expiry: (2025, 8, 1), current_stock: 30, avg_daily_sales: 5.0 },
    SeedRow { id: "8", name: "Premium Cotton Tee", category: Category::Clothes, cost_price: 4.0, selling_price: 15.0, expiry: (2035, 1, 1), current_stock: 60, avg_daily_sales: 8.0 },
    SeedRow { id: "9", name: "Super Hero Action Figure", category: Category::Toys, cost_price: 5.0, selling_price: 18.0, expiry: (2035, 1, 1), current_stock: 20, avg_daily_sales: 2.0 },
    SeedRow { id: "10", name: "Eco Laundry Pods", category: Category::HomeEssentials, cost_price: 6.0, selling_price: 14.0, expiry: (2026, 1, 1), current_stock: 50, avg_daily_sales: 15.0 },
    SeedRow { id: "11", name: "Whole Wheat Bread", category: Category::Food, cost_price: 0.8, selling_price: 1.5, expiry: (2025, 5, 10), current_stock: 30, avg_daily_sales: 20.0 },
    SeedRow { id: "12", name: "Bluetooth Headphones", category: Category::Electronics, cost_price: 35.0, selling_price: 79.0, expiry: (2028, 12, 1), current_stock: 15, avg_daily_sales: 2.0 },
    SeedRow { id: "13", name: "Mineral Water 500ml", category: Category::Beverages, cost_price: 0.2, selling_price: 1.0, expiry: (2026, 1, 1), current_stock: 200, avg_daily_sales: 50.0 },
    SeedRow { id: "14", name: "Multivitamin Gummies", category: Category::Cosmetics, cost_price: 10.0, selling_price: 25.0, expiry: (2025, 11, 15), current_stock: 25, avg_daily_sales: 3.0 },
    SeedRow { id: "15", name: "Mechanical Pencil Set", category: Category::Stationery, cost_price: 2.0, selling_price: 5.5, expiry: (2032, 1, 1), current_stock: 45, avg_daily_sales: 5.0 },
];

/// The fifteen demo products, all stamped 2025-05-01.
///
/// Fails on the first malformed row instead of skipping it.
pub fn initial_products() -> DomainResult<Vec<Product>> {
    products_from(&SEED)
}

fn products_from(rows: &[SeedRow]) -> DomainResult<Vec<Product>> {
    let stamped = Utc
        .with_ymd_and_hms(2025, 5, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();

    rows.iter()
        .map(|row| -> DomainResult<Product> {
            let (y, m, d) = row.expiry;
            let expiry_date = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
                DomainError::invalid_product(format!("seed row {}: bad expiry {y}-{m}-{d}", row.id))
            })?;
            let product = Product {
                id: row.id.parse()?,
                name: row.name.to_string(),
                category: row.category,
                cost_price: row.cost_price,
                selling_price: row.selling_price,
                expiry_date,
                current_stock: row.current_stock,
                avg_daily_sales: row.avg_daily_sales,
                last_updated: stamped,
            };
            product.validate()?;
            Ok(product)
        })
        .collect()
}
