//! Product collection persistence.
//!
//! The whole catalogue is one JSON document stored under a fixed key, the way
//! the dashboard kept it in browser local storage. There is no schema
//! versioning: changing the shape of `Product` breaks existing stored data.

mod in_memory;
mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use retailiq_products::Product;

pub use in_memory::InMemoryProductRepository;
pub use sqlite::SqliteProductRepository;

/// Key the serialized catalogue lives under.
pub const STORAGE_KEY: &str = "retail_products";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("stored catalogue is unreadable: {0}")]
    Corrupt(String),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(value: serde_json::Error) -> Self {
        RepositoryError::Corrupt(value.to_string())
    }
}

/// Load/save of the full product snapshot.
///
/// `load` distinguishes "never saved" (`None`) from "saved empty" (`Some([])`).
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn load(&self) -> Result<Option<Vec<Product>>, RepositoryError>;

    /// Replace the stored catalogue with `snapshot`.
    async fn save(&self, snapshot: &[Product]) -> Result<(), RepositoryError>;
}

pub(crate) fn encode(snapshot: &[Product]) -> Result<String, RepositoryError> {
    Ok(serde_json::to_string(snapshot)?)
}

pub(crate) fn decode(raw: &str) -> Result<Vec<Product>, RepositoryError> {
    Ok(serde_json::from_str(raw)?)
}
