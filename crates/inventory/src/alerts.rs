//! Priority health alerts (expiring soon or nearly out of stock).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use retailiq_core::ProductId;
use retailiq_products::{Category, Product};

pub const ALERT_EXPIRY_WINDOW_DAYS: i64 = 30;
pub const ALERT_LOW_STOCK_THRESHOLD: u32 = 10;
pub const MAX_ALERTS: usize = 10;
/// Fewer whole days than this left on the shelf is a critical risk.
pub const SHELF_CRITICAL_DAYS: i64 = 10;

/// Per-product shelf marker shown in the inventory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShelfStatus {
    CriticalRisk,
    HealthyShelf,
}

impl ShelfStatus {
    pub fn of(product: &Product, now: DateTime<Utc>) -> Self {
        Self::from_days_left(product.days_to_expiry(now))
    }

    fn from_days_left(days_left: i64) -> Self {
        if days_left < SHELF_CRITICAL_DAYS {
            ShelfStatus::CriticalRisk
        } else {
            ShelfStatus::HealthyShelf
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAlert {
    pub product_id: ProductId,
    pub name: String,
    pub category: Category,
    pub current_stock: u32,
    pub days_left: i64,
    /// True for a stock alert, false when only expiry triggered it.
    pub low_stock: bool,
    pub shelf_status: ShelfStatus,
}

/// Products expiring within 30 days or holding fewer than 10 units.
///
/// Lowest stock first (stable for ties), at most `MAX_ALERTS`.
pub fn priority_alerts(products: &[Product], now: DateTime<Utc>) -> Vec<HealthAlert> {
    let mut alerts: Vec<HealthAlert> = products
        .iter()
        .filter_map(|p| {
            let days_left = p.days_to_expiry(now);
            let low_stock = p.current_stock < ALERT_LOW_STOCK_THRESHOLD;
            (days_left < ALERT_EXPIRY_WINDOW_DAYS || low_stock).then(|| HealthAlert {
                product_id: p.id.clone(),
                name: p.name.clone(),
                category: p.category,
                current_stock: p.current_stock,
                days_left,
                low_stock,
                shelf_status: ShelfStatus::from_days_left(days_left),
            })
        })
        .collect();

    alerts.sort_by_key(|a| a.current_stock);
    alerts.truncate(MAX_ALERTS);
    alerts
}
