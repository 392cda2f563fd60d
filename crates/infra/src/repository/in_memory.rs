use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use retailiq_products::Product;

use super::{ProductRepository, RepositoryError, STORAGE_KEY, decode, encode};

/// In-memory key/value store for tests/dev.
///
/// Keeps the serialized text rather than the values so a round trip goes
/// through the same encoding as the durable store.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the raw stored text (e.g. data written by another client).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let repo = Self::new();
        if let Ok(mut map) = repo.entries.write() {
            map.insert(STORAGE_KEY.to_string(), raw.into());
        }
        repo
    }

    pub fn raw(&self) -> Option<String> {
        self.entries.read().ok()?.get(STORAGE_KEY).cloned()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn load(&self) -> Result<Option<Vec<Product>>, RepositoryError> {
        let map = self
            .entries
            .read()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))?;
        map.get(STORAGE_KEY).map(|raw| decode(raw)).transpose()
    }

    async fn save(&self, snapshot: &[Product]) -> Result<(), RepositoryError> {
        let raw = encode(snapshot)?;
        let mut map = self
            .entries
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))?;
        map.insert(STORAGE_KEY.to_string(), raw);
        Ok(())
    }
}
