//! Catalogue snapshot (copy-on-write product collection).

use serde::{Deserialize, Serialize};

use retailiq_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{Category, Product};

/// Ordered, immutable set of products.
///
/// Newest entries come first. Order matters for display and for the
/// borrowed-velocity default on submission; analysis does not depend on it.
/// Mutations return a new snapshot and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// New snapshot with `product` in front.
    pub fn with_prepended(&self, product: Product) -> DomainResult<Self> {
        if self.products.iter().any(|p| p.same_identity(&product)) {
            return Err(DomainError::validation(format!(
                "product {} already exists",
                product.id
            )));
        }
        let mut products = Vec::with_capacity(self.products.len() + 1);
        products.push(product);
        products.extend(self.products.iter().cloned());
        Ok(Self { products })
    }
}

impl From<Vec<Product>> for ProductCatalog {
    fn from(value: Vec<Product>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn product(id: &str, category: Category, sales: f64) -> Product {
        Product {
            id: id.parse().unwrap(),
            name: format!("item {id}"),
            category,
            cost_price: 1.0,
            selling_price: 2.0,
            expiry_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            current_stock: 10,
            avg_daily_sales: sales,
            last_updated: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn prepend_leaves_original_snapshot_untouched() {
        let original = ProductCatalog::new(vec![product("a", Category::Food, 1.0)]);
        let next = original.with_prepended(product("b", Category::Toys, 2.0)).unwrap();

        assert_eq!(original.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next.products()[0].id.as_str(), "b");
        assert_eq!(next.products()[1].id.as_str(), "a");
    }

    #[test]
    fn prepend_rejects_duplicate_id() {
        let catalog = ProductCatalog::new(vec![product("a", Category::Food, 1.0)]);
        let err = catalog.with_prepended(product("a", Category::Toys, 2.0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn in_category_filters_peers() {
        let catalog = ProductCatalog::new(vec![
            product("a", Category::Food, 1.0),
            product("b", Category::Toys, 2.0),
            product("c", Category::Food, 3.0),
        ]);
        let ids: Vec<_> = catalog.in_category(Category::Food).map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
