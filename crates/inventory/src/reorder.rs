use std::collections::HashMap;

use chrono::{DateTime, Utc};

use retailiq_products::{Category, Product};

use crate::analysis::{AnalysisResult, DecisionError, RiskLevel};
use crate::policy::ReorderPolicy;

const HEALTHY_REASON: &str = "Inventory levels are healthy.";

/// Deterministic reorder/risk engine.
///
/// Model (first match wins):
/// - Expiry lockout: fewer than `expiry_lockout_days` left → never reorder, HIGH risk.
/// - Demand depletion: stock covers at most lead time + safety stock → reorder up to
///   `reorder_target_days` of demand; HIGH risk when under `low_stock_risk_multiplier`
///   days of demand, MEDIUM otherwise.
/// - Otherwise healthy, LOW risk.
///
/// Daily velocity is the product's own `avg_daily_sales`, or the mean of its category
/// peers when that is zero.
#[derive(Debug, Clone, Default)]
pub struct ReorderEngine {
    policy: ReorderPolicy,
}

impl ReorderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: ReorderPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &ReorderPolicy {
        &self.policy
    }

    /// Evaluate `target` against the catalogue it belongs to.
    ///
    /// `all_products` is only used for the same-category velocity fallback;
    /// `target` need not be a member of it.
    pub fn analyze(
        &self,
        target: &Product,
        all_products: &[Product],
        now: DateTime<Utc>,
    ) -> Result<AnalysisResult, DecisionError> {
        self.policy.validate()?;
        target.validate()?;

        let mut velocity = CategoryVelocity::default();
        for p in all_products.iter().filter(|p| p.category == target.category) {
            p.validate()?;
            velocity.add(p);
        }

        Ok(self.decide(target, velocity.mean(target.category), now))
    }

    /// Evaluate every product of a catalogue, preserving order.
    ///
    /// Category means are computed once; any invalid product fails the whole run.
    pub fn analyze_all(
        &self,
        products: &[Product],
        now: DateTime<Utc>,
    ) -> Result<Vec<AnalysisResult>, DecisionError> {
        self.policy.validate()?;

        let mut velocity = CategoryVelocity::default();
        for p in products {
            p.validate()?;
            velocity.add(p);
        }

        Ok(products
            .iter()
            .map(|p| self.decide(p, velocity.mean(p.category), now))
            .collect())
    }

    fn decide(&self, target: &Product, category_avg_sales: f64, now: DateTime<Utc>) -> AnalysisResult {
        let policy = &self.policy;
        let days_to_expiry = target.days_to_expiry(now);

        let daily_sales = if target.avg_daily_sales != 0.0 {
            target.avg_daily_sales
        } else {
            category_avg_sales
        };
        let demand_window = daily_sales * f64::from(policy.demand_window_days());
        let stock = f64::from(target.current_stock);

        if days_to_expiry < policy.expiry_lockout_days {
            return AnalysisResult {
                product_id: target.id.clone(),
                reorder: false,
                suggested_quantity: 0,
                reason: format!(
                    "CRITICAL: Expiry in {days_to_expiry} days. Reordering blocked to prevent wastage."
                ),
                risk_level: RiskLevel::High,
            };
        }

        if stock <= demand_window {
            // Unclamped: with non-negative stock inside the window this is never negative.
            let suggested_quantity =
                round_half_up(daily_sales * f64::from(policy.reorder_target_days) - stock) as i64;
            let divisor = if daily_sales != 0.0 { daily_sales } else { 1.0 };
            let days_until_depletion = round_half_up(stock / divisor) as i64;
            let risk_level = if stock < daily_sales * policy.low_stock_risk_multiplier {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            };

            return AnalysisResult {
                product_id: target.id.clone(),
                reorder: true,
                suggested_quantity,
                reason: format!(
                    "Demand Forecast: Daily velocity of {} units. Stock will deplete in {days_until_depletion} days.",
                    one_decimal(daily_sales)
                ),
                risk_level,
            };
        }

        AnalysisResult {
            product_id: target.id.clone(),
            reorder: false,
            suggested_quantity: 0,
            reason: HEALTHY_REASON.to_string(),
            risk_level: RiskLevel::Low,
        }
    }
}

/// Running sum/count of `avg_daily_sales` per category.
#[derive(Debug, Default)]
struct CategoryVelocity {
    totals: HashMap<Category, (f64, usize)>,
}

impl CategoryVelocity {
    fn add(&mut self, product: &Product) {
        let entry = self.totals.entry(product.category).or_insert((0.0, 0));
        entry.0 += product.avg_daily_sales;
        entry.1 += 1;
    }

    /// Mean velocity; an empty category is 0 (denominator floors at 1).
    fn mean(&self, category: Category) -> f64 {
        let (sum, count) = self.totals.get(&category).copied().unwrap_or((0.0, 0));
        sum / count.max(1) as f64
    }
}

/// Round to the nearest integer, halves toward +∞ (`-2.5 → -2`, `2.5 → 3`).
pub(crate) fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// One fractional digit, exact halves rounded away from zero (`2.25 → "2.3"`).
///
/// `{:.1}` alone rounds exact binary halves to even. An f64 sits exactly on a
/// hundredths-5 tie only when `4x` is an odd integer.
pub(crate) fn one_decimal(x: f64) -> String {
    let quarters = x * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (x * 10.0).round() / 10.0)
    } else {
        format!("{x:.1}")
    }
}
