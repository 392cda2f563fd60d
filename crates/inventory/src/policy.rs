//! Reorder policy parameters.

use serde::{Deserialize, Serialize};

use crate::analysis::DecisionError;

/// Supplier replenishment lag assumed for every product.
pub const LEAD_TIME_DAYS: u32 = 7;
/// Buffer beyond lead time before stock is considered at risk.
pub const SAFETY_STOCK_DAYS: u32 = 3;
/// Below this many days to expiry, reordering is blocked outright.
pub const EXPIRY_LOCKOUT_DAYS: i64 = 14;
/// Days of demand a reorder should cover.
pub const REORDER_TARGET_DAYS: u32 = 21;
/// Days of demand below which a reorder is HIGH risk.
pub const LOW_STOCK_RISK_MULTIPLIER: f64 = 2.0;

/// Fixed policy knobs for the reorder engine.
///
/// `Default` is the store-wide policy; other values exist for tests and
/// what-if runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderPolicy {
    pub lead_time_days: u32,
    pub safety_stock_days: u32,
    pub expiry_lockout_days: i64,
    pub reorder_target_days: u32,
    pub low_stock_risk_multiplier: f64,
}

impl Default for ReorderPolicy {
    fn default() -> Self {
        Self {
            lead_time_days: LEAD_TIME_DAYS,
            safety_stock_days: SAFETY_STOCK_DAYS,
            expiry_lockout_days: EXPIRY_LOCKOUT_DAYS,
            reorder_target_days: REORDER_TARGET_DAYS,
            low_stock_risk_multiplier: LOW_STOCK_RISK_MULTIPLIER,
        }
    }
}

impl ReorderPolicy {
    /// Days of demand that must be on hand to avoid a reorder.
    pub fn demand_window_days(&self) -> u32 {
        self.lead_time_days.saturating_add(self.safety_stock_days)
    }

    pub fn validate(&self) -> Result<(), DecisionError> {
        if !(self.low_stock_risk_multiplier.is_finite() && self.low_stock_risk_multiplier >= 0.0) {
            return Err(DecisionError::InvalidPolicy(
                "low_stock_risk_multiplier must be a finite non-negative number".to_string(),
            ));
        }
        if self.reorder_target_days < self.demand_window_days() {
            return Err(DecisionError::InvalidPolicy(format!(
                "reorder_target_days ({}) must cover lead time + safety stock ({})",
                self.reorder_target_days,
                self.demand_window_days()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_store_constants() {
        let p = ReorderPolicy::default();
        assert_eq!(p.demand_window_days(), 10);
        assert_eq!(p.expiry_lockout_days, 14);
        assert_eq!(p.reorder_target_days, 21);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_target_shorter_than_window() {
        let p = ReorderPolicy {
            reorder_target_days: 5,
            ..ReorderPolicy::default()
        };
        assert!(matches!(p.validate(), Err(DecisionError::InvalidPolicy(_))));
    }

    #[test]
    fn rejects_nan_multiplier() {
        let p = ReorderPolicy {
            low_stock_risk_multiplier: f64::NAN,
            ..ReorderPolicy::default()
        };
        assert!(p.validate().is_err());
    }
}
