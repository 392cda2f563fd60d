//! Dashboard overview figures.
//!
//! Aggregates over the whole catalogue: SKU counts, stock and expiry pressure,
//! store margin, and per-category capital / velocity breakdowns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use retailiq_products::{Category, Product};

use crate::reorder::round_half_up;

/// Products with fewer units than this count as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 15;
/// Products expiring in fewer days than this count as near expiry.
pub const NEAR_EXPIRY_DAYS: f64 = 15.0;

/// One bar/slice of a per-category chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFigure {
    pub category: Category,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_skus: usize,
    pub low_stock_count: usize,
    pub near_expiry_count: usize,
    /// Mean unit margin across products, in percent.
    pub store_margin_percent: f64,
    /// Stock at cost per category, rounded to whole currency units.
    pub capital_by_category: Vec<CategoryFigure>,
    /// Summed `avg_daily_sales` per category.
    pub sales_velocity_by_category: Vec<CategoryFigure>,
}

impl Overview {
    pub fn compute(products: &[Product], now: DateTime<Utc>) -> Self {
        let low_stock_count = products
            .iter()
            .filter(|p| p.current_stock < LOW_STOCK_THRESHOLD)
            .count();

        // Fractional days here, unlike the whole-day lockout in the engine.
        let near_expiry_count = products
            .iter()
            .filter(|p| p.fractional_days_to_expiry(now) < NEAR_EXPIRY_DAYS)
            .count();

        let margin_sum: f64 = products.iter().map(Product::margin_ratio).sum();
        let store_margin_percent = margin_sum / products.len().max(1) as f64 * 100.0;

        let capital_by_category = per_category(products, |ps| {
            round_half_up(ps.map(Product::stock_value_at_cost).sum())
        });
        let sales_velocity_by_category =
            per_category(products, |ps| ps.map(|p| p.avg_daily_sales).sum());

        Self {
            total_skus: products.len(),
            low_stock_count,
            near_expiry_count,
            store_margin_percent,
            capital_by_category,
            sales_velocity_by_category,
        }
    }
}

fn per_category<F>(products: &[Product], mut fold: F) -> Vec<CategoryFigure>
where
    F: FnMut(&mut dyn Iterator<Item = &Product>) -> f64,
{
    Category::ALL
        .into_iter()
        .map(|category| {
            let mut members = products.iter().filter(move |p| p.category == category);
            CategoryFigure {
                category,
                value: fold(&mut members),
            }
        })
        .collect()
}
