use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

use retailiq_products::Product;

use super::{ProductRepository, RepositoryError, STORAGE_KEY, decode, encode};

fn map_sqlx_error(op: &str, err: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(format!("{op}: {err}"))
}

/// SQLite-backed key/value store for the catalogue document.
#[derive(Debug, Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
    key: String,
}

impl SqliteProductRepository {
    /// Open (creating if needed) the database at `url` and ensure the table exists.
    ///
    /// Accepts any sqlx SQLite URL, including `sqlite::memory:`.
    pub async fn connect(url: &str) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| map_sqlx_error("parse_url", e))?
            .create_if_missing(true);

        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    RepositoryError::Storage(format!("failed to create {}: {e}", parent.display()))
                })?;
            }
        }

        // One long-lived connection: a single writer, and an in-memory
        // database lives exactly as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS key_value_store (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| map_sqlx_error("create_table", e))?;

        Ok(Self {
            pool,
            key: STORAGE_KEY.to_string(),
        })
    }

    /// Store under a different key (several catalogues in one file).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn load(&self) -> Result<Option<Vec<Product>>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM key_value_store WHERE key = ?1")
            .bind(&self.key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("load", e))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let raw: String = row.try_get("value").map_err(|e| map_sqlx_error("load", e))?;
        decode(&raw).map(Some)
    }

    async fn save(&self, snapshot: &[Product]) -> Result<(), RepositoryError> {
        let raw = encode(snapshot)?;
        sqlx::query(
            r#"
            INSERT INTO key_value_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(&self.key)
        .bind(raw)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("save", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initial_products;

    async fn memory_repo() -> SqliteProductRepository {
        SqliteProductRepository::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn empty_database_loads_none() {
        let repo = memory_repo().await;
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_previous_snapshot() {
        let repo = memory_repo().await;
        let products = initial_products().unwrap();

        repo.save(&products).await.unwrap();
        repo.save(&products[..3]).await.unwrap();

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded, products[..3].to_vec());
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let repo = memory_repo().await;
        let other = repo.clone().with_key("archived_products");

        repo.save(&initial_products().unwrap()).await.unwrap();
        assert!(other.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_database_survives_reconnect() {
        let dir = std::env::temp_dir().join(format!("retailiq-test-{}", std::process::id()));
        let path = dir.join("nested").join("catalogue.db");
        let url = format!("sqlite://{}", path.display());

        {
            let repo = SqliteProductRepository::connect(&url).await.unwrap();
            repo.save(&initial_products().unwrap()[..2]).await.unwrap();
        }

        let reopened = SqliteProductRepository::connect(&url).await.unwrap();
        assert_eq!(reopened.load().await.unwrap().unwrap().len(), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
