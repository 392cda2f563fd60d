//! Product submission: raw form input → validated `Product`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use retailiq_core::{DomainError, DomainResult, ProductId};

use crate::catalog::ProductCatalog;
use crate::product::{Category, Product};

/// Daily velocity assumed for a product whose category has no usable peer.
pub const DEFAULT_DAILY_SALES: f64 = 2.0;

/// Fields a user enters for a new product.
///
/// Stock is signed and the expiry date is a string so that bad input reaches
/// validation instead of failing somewhere less helpful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSubmission {
    pub name: String,
    pub category: Category,
    pub cost_price: f64,
    pub selling_price: f64,
    pub expiry_date: String,
    pub current_stock: i64,
}

impl ProductSubmission {
    /// Validate and build the product record.
    ///
    /// `avgDailySales` is borrowed from the first product of the same category
    /// already in `catalog`; when there is none (or it sells nothing) the
    /// default of 2 units/day applies.
    pub fn into_product(
        self,
        catalog: &ProductCatalog,
        id: ProductId,
        now: DateTime<Utc>,
    ) -> DomainResult<Product> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        for (field, value) in [("costPrice", self.cost_price), ("sellingPrice", self.selling_price)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::validation(format!(
                    "{field} must be a non-negative number"
                )));
            }
        }

        let expiry_date = parse_expiry(&self.expiry_date)?;

        let current_stock = u32::try_from(self.current_stock).map_err(|_| {
            DomainError::invalid_product(format!(
                "currentStock must be between 0 and {} (got {})",
                u32::MAX,
                self.current_stock
            ))
        })?;

        let product = Product {
            id,
            name: name.to_string(),
            category: self.category,
            cost_price: self.cost_price,
            selling_price: self.selling_price,
            expiry_date,
            current_stock,
            avg_daily_sales: borrowed_daily_sales(catalog, self.category),
            last_updated: now,
        };
        // The borrowed velocity comes from stored data and may be corrupt.
        product.validate()?;
        Ok(product)
    }
}

fn parse_expiry(raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        DomainError::invalid_product(format!("expiryDate {raw:?} is not a YYYY-MM-DD date: {e}"))
    })
}

fn borrowed_daily_sales(catalog: &ProductCatalog, category: Category) -> f64 {
    catalog
        .in_category(category)
        .next()
        .map(|p| p.avg_daily_sales)
        .filter(|sales| *sales != 0.0)
        .unwrap_or(DEFAULT_DAILY_SALES)
}
