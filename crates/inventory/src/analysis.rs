use serde::{Deserialize, Serialize};
use thiserror::Error;

use retailiq_core::{DomainError, ProductId, ValueObject};

/// Risk attached to a reorder verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl ValueObject for RiskLevel {}

/// Reorder verdict for one product.
///
/// Derived on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub product_id: ProductId,
    pub reorder: bool,
    /// Units to order. Always 0 when `reorder` is false.
    pub suggested_quantity: i64,
    pub reason: String,
    pub risk_level: RiskLevel,
}

impl ValueObject for AnalysisResult {}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecisionError {
    #[error("invalid product: {0}")]
    InvalidProduct(String),

    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
}

impl From<DomainError> for DecisionError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::InvalidProduct(msg) | DomainError::Validation(msg) => {
                DecisionError::InvalidProduct(msg)
            }
            other => DecisionError::InvalidProduct(other.to_string()),
        }
    }
}
