use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::info;

use retailiq_ai::{GeminiClient, StrategyAdvisor};
use retailiq_infra::{
    AppConfig, CatalogService, InMemoryProductRepository, ProductRepository, SqliteProductRepository,
    StorageBackend,
};
use retailiq_inventory::ReorderEngine;

/// Source of "now" for every time-dependent computation.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Everything a handler needs.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<CatalogService>,
    clock: Clock,
}

impl AppServices {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self::with_clock(catalog, Arc::new(Utc::now))
    }

    pub fn with_clock(catalog: Arc<CatalogService>, clock: Clock) -> Self {
        Self { catalog, clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}

/// Wire storage, the Gemini-backed advisor and the catalogue service.
pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let repository: Arc<dyn ProductRepository> = match &config.storage {
        StorageBackend::InMemory => {
            info!("using in-memory catalogue storage");
            Arc::new(InMemoryProductRepository::new())
        }
        StorageBackend::Sqlite(url) => {
            info!(url = %url, "using sqlite catalogue storage");
            Arc::new(
                SqliteProductRepository::connect(url)
                    .await
                    .with_context(|| format!("failed to open {url}"))?,
            )
        }
    };

    let client = GeminiClient::new(config.gemini.clone()).context("failed to build Gemini client")?;
    let advisor = Arc::new(StrategyAdvisor::new(client));

    let catalog = CatalogService::open(repository, advisor, ReorderEngine::new(), config.seed_when_empty)
        .await
        .context("failed to load catalogue")?;

    Ok(AppServices::new(Arc::new(catalog)))
}
