//! Velocity leaderboard: fastest-selling products first.

use serde::{Deserialize, Serialize};

use retailiq_core::ProductId;
use retailiq_products::{Category, Product};

pub const MAX_RANKED: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityRank {
    /// 1-based position.
    pub rank: usize,
    pub product_id: ProductId,
    pub name: String,
    pub category: Category,
    pub avg_daily_sales: f64,
    pub selling_price: f64,
}

/// Top `MAX_RANKED` products by `avg_daily_sales`, descending.
///
/// Equal velocities keep catalogue order.
pub fn velocity_rankings(products: &[Product]) -> Vec<VelocityRank> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by(|a, b| b.avg_daily_sales.total_cmp(&a.avg_daily_sales));

    ranked
        .into_iter()
        .take(MAX_RANKED)
        .enumerate()
        .map(|(idx, p)| VelocityRank {
            rank: idx + 1,
            product_id: p.id.clone(),
            name: p.name.clone(),
            category: p.category,
            avg_daily_sales: p.avg_daily_sales,
            selling_price: p.selling_price,
        })
        .collect()
}
