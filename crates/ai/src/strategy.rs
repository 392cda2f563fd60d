use serde::{Deserialize, Serialize};

use retailiq_core::ValueObject;

/// Reason label used right after a product is entered.
pub const NEW_INVENTORY_ENTRY: &str = "New Inventory Entry";
/// Reason label used when reviewing an existing product on demand.
pub const INVENTORY_REVIEW: &str = "Specific Inventory Review";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyKind {
    Discount,
    Bundle,
    FlashSale,
    Loyalty,
    Bogo,
}

/// One marketing suggestion as returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingStrategy {
    #[serde(rename = "type")]
    pub kind: StrategyKind,
    pub title: String,
    pub description: String,
}

impl ValueObject for MarketingStrategy {}

/// The suggestion handed out whenever the model cannot be used.
pub fn fallback_strategies() -> Vec<MarketingStrategy> {
    vec![MarketingStrategy {
        kind: StrategyKind::Discount,
        title: "Manual Clearance Push".to_string(),
        description: "System reached API limit. Recommended action: 25% shelf-edge discount applied immediately.".to_string(),
    }]
}
