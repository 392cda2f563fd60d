use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use retailiq_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Closed set of product categories.
///
/// Serialized with the display labels used by stored catalogues
/// (`"Home Essentials"`, not `"HomeEssentials"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Beverages,
    #[serde(rename = "Home Essentials")]
    HomeEssentials,
    Furniture,
    Appliances,
    Clothes,
    Toys,
    Electronics,
    Cosmetics,
    Stationery,
}

impl Category {
    /// All categories, in dashboard display order.
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Beverages,
        Category::HomeEssentials,
        Category::Furniture,
        Category::Appliances,
        Category::Clothes,
        Category::Toys,
        Category::Electronics,
        Category::Cosmetics,
        Category::Stationery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Beverages => "Beverages",
            Category::HomeEssentials => "Home Essentials",
            Category::Furniture => "Furniture",
            Category::Appliances => "Appliances",
            Category::Clothes => "Clothes",
            Category::Toys => "Toys",
            Category::Electronics => "Electronics",
            Category::Cosmetics => "Cosmetics",
            Category::Stationery => "Stationery",
        }
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown category: {wanted}")))
    }
}

/// One inventory line item.
///
/// Field names are camelCase on the wire so stored catalogues stay readable by
/// the dashboard that wrote them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub cost_price: f64,
    pub selling_price: f64,
    pub expiry_date: NaiveDate,
    pub current_stock: u32,
    pub avg_daily_sales: f64,
    #[serde(with = "timestamp")]
    pub last_updated: DateTime<Utc>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Product {
    /// Reject records whose numbers cannot be evaluated.
    ///
    /// Stock is unsigned and the expiry date is already a calendar date, so
    /// only the decimal fields need checking.
    pub fn validate(&self) -> DomainResult<()> {
        for (field, value) in [
            ("costPrice", self.cost_price),
            ("sellingPrice", self.selling_price),
            ("avgDailySales", self.avg_daily_sales),
        ] {
            if !value.is_finite() {
                return Err(DomainError::invalid_product(format!(
                    "product {}: {field} is not a finite number",
                    self.id
                )));
            }
            if value < 0.0 {
                return Err(DomainError::invalid_product(format!(
                    "product {}: {field} cannot be negative ({value})",
                    self.id
                )));
            }
        }
        Ok(())
    }

    /// Expiry instant: midnight UTC at the start of `expiry_date`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.expiry_date.and_time(NaiveTime::MIN))
    }

    /// Days until expiry as a fraction (negative once expired).
    pub fn fractional_days_to_expiry(&self, now: DateTime<Utc>) -> f64 {
        (self.expires_at() - now).num_milliseconds() as f64 / MILLIS_PER_DAY
    }

    /// Whole days until expiry, rounded up.
    pub fn days_to_expiry(&self, now: DateTime<Utc>) -> i64 {
        self.fractional_days_to_expiry(now).ceil() as i64
    }

    /// Unit margin as a fraction of the selling price.
    ///
    /// A zero selling price yields 0 instead of a division by zero.
    pub fn margin_ratio(&self) -> f64 {
        if self.selling_price == 0.0 {
            return 0.0;
        }
        (self.selling_price - self.cost_price) / self.selling_price
    }

    /// Capital tied up in stock at cost.
    pub fn stock_value_at_cost(&self) -> f64 {
        f64::from(self.current_stock) * self.cost_price
    }
}

/// `lastUpdated` serde: RFC 3339 out; RFC 3339 or a bare `YYYY-MM-DD` in.
mod timestamp {
    use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
            .map_err(|e| D::Error::custom(format!("invalid lastUpdated {raw:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(expiry: NaiveDate) -> Product {
        Product {
            id: "p-1".parse().unwrap(),
            name: "Fresh Milk 1L".to_string(),
            category: Category::Food,
            cost_price: 1.2,
            selling_price: 2.5,
            expiry_date: expiry,
            current_stock: 45,
            avg_daily_sales: 12.0,
            last_updated: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_to_expiry_rounds_partial_days_up() {
        let p = sample(date(2026, 10, 24));
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap();
        assert_eq!(p.days_to_expiry(now), 5);
        assert!(p.fractional_days_to_expiry(now) < 5.0);
    }

    #[test]
    fn days_to_expiry_is_negative_after_expiry() {
        let p = sample(date(2026, 10, 10));
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        assert_eq!(p.days_to_expiry(now), -9);
    }

    #[test]
    fn validate_rejects_non_finite_and_negative_numbers() {
        let mut p = sample(date(2030, 1, 1));
        p.avg_daily_sales = f64::NAN;
        assert!(matches!(p.validate(), Err(DomainError::InvalidProduct(_))));

        let mut p = sample(date(2030, 1, 1));
        p.cost_price = -1.0;
        assert!(matches!(p.validate(), Err(DomainError::InvalidProduct(_))));

        assert!(sample(date(2030, 1, 1)).validate().is_ok());
    }

    #[test]
    fn margin_ratio_guards_zero_price() {
        let mut p = sample(date(2030, 1, 1));
        assert!((p.margin_ratio() - 0.52).abs() < 1e-9);
        p.selling_price = 0.0;
        assert_eq!(p.margin_ratio(), 0.0);
    }

    #[test]
    fn category_round_trips_display_labels() {
        assert_eq!(
            serde_json::to_string(&Category::HomeEssentials).unwrap(),
            "\"Home Essentials\""
        );
        assert_eq!("home essentials".parse::<Category>().unwrap(), Category::HomeEssentials);
        assert!("Garden".parse::<Category>().is_err());
    }

    #[test]
    fn deserializes_stored_record_with_date_only_timestamp() {
        let raw = r#"{
            "id": "1", "name": "Fresh Milk 1L", "category": "Food",
            "costPrice": 1.2, "sellingPrice": 2.5, "expiryDate": "2025-05-15",
            "currentStock": 45, "avgDailySales": 12, "lastUpdated": "2025-05-01"
        }"#;
        let p: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(p.id.as_str(), "1");
        assert_eq!(p.expiry_date, date(2025, 5, 15));
        assert_eq!(p.last_updated, Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_stored_record_with_malformed_expiry() {
        let raw = r#"{
            "id": "1", "name": "x", "category": "Food",
            "costPrice": 1, "sellingPrice": 2, "expiryDate": "next tuesday",
            "currentStock": 1, "avgDailySales": 1, "lastUpdated": "2025-05-01"
        }"#;
        assert!(serde_json::from_str::<Product>(raw).is_err());
    }
}
