//! Catalogue orchestration (application-level).
//!
//! ```text
//! submit(submission)
//!   ↓
//! 1. Validate against the current snapshot (borrowed velocity, fresh id)
//!   ↓
//! 2. Prepend → new snapshot
//!   ↓
//! 3. Analyze the new product against the new snapshot
//!   ↓
//! 4. Persist the new snapshot, swap it in
//!   ↓
//! 5. Ask the advisor for strategies (outside the lock; never fails)
//! ```
//!
//! Reads take a cheap `Arc` clone of the current snapshot; only one mutation
//! runs at a time and readers never observe a half-applied one.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use retailiq_ai::{MarketingStrategy, NEW_INVENTORY_ENTRY, StrategyRequestor};
use retailiq_core::{DomainError, ProductId};
use retailiq_inventory::{
    AnalysisResult, DecisionError, HealthAlert, Overview, ReorderEngine, VelocityRank,
    priority_alerts, velocity_rankings,
};
use retailiq_products::{Product, ProductCatalog, ProductSubmission};

use crate::repository::{ProductRepository, RepositoryError};
use crate::seed::initial_products;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Decision(#[from] DecisionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("product {0} not found")]
    NotFound(ProductId),
}

/// Outcome of a product submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submitted {
    pub product: Product,
    pub analysis: AnalysisResult,
    pub strategies: Vec<MarketingStrategy>,
}

pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
    advisor: Arc<dyn StrategyRequestor>,
    engine: ReorderEngine,
    catalog: RwLock<Arc<ProductCatalog>>,
}

impl core::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatalogService")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl CatalogService {
    /// Load the stored catalogue; when nothing was ever stored, optionally
    /// seed (and persist) the demo products.
    pub async fn open(
        repository: Arc<dyn ProductRepository>,
        advisor: Arc<dyn StrategyRequestor>,
        engine: ReorderEngine,
        seed_when_empty: bool,
    ) -> Result<Self, ServiceError> {
        let products = match repository.load().await? {
            Some(products) => {
                info!(count = products.len(), "catalogue loaded");
                products
            }
            None if seed_when_empty => {
                let seeded = initial_products()?;
                repository.save(&seeded).await?;
                info!(count = seeded.len(), "empty storage; demo catalogue seeded");
                seeded
            }
            None => Vec::new(),
        };

        Ok(Self {
            repository,
            advisor,
            engine,
            catalog: RwLock::new(Arc::new(ProductCatalog::new(products))),
        })
    }

    /// Current snapshot (consistent for the caller's whole computation).
    pub async fn snapshot(&self) -> Arc<ProductCatalog> {
        self.catalog.read().await.clone()
    }

    pub async fn list(&self) -> Vec<Product> {
        self.snapshot().await.products().to_vec()
    }

    pub async fn get(&self, id: &ProductId) -> Result<Product, ServiceError> {
        self.snapshot()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(id.clone()))
    }

    pub async fn submit(
        &self,
        submission: ProductSubmission,
        now: DateTime<Utc>,
    ) -> Result<Submitted, ServiceError> {
        let (product, analysis) = {
            let mut current = self.catalog.write().await;

            let product = submission.into_product(&current, ProductId::generate(), now)?;
            let next = current.with_prepended(product.clone())?;
            let analysis = self.engine.analyze(&product, next.products(), now)?;

            // Persist last: a failed mutation leaves storage and snapshot untouched.
            self.repository.save(next.products()).await?;
            *current = Arc::new(next);
            (product, analysis)
        };

        info!(
            product_id = %product.id,
            category = %product.category,
            reorder = analysis.reorder,
            risk = analysis.risk_level.as_str(),
            "product submitted"
        );

        let strategies = self.advisor.request(&product, NEW_INVENTORY_ENTRY).await;

        Ok(Submitted {
            product,
            analysis,
            strategies,
        })
    }

    pub async fn analyze(
        &self,
        id: &ProductId,
        now: DateTime<Utc>,
    ) -> Result<AnalysisResult, ServiceError> {
        let snapshot = self.snapshot().await;
        let product = snapshot
            .get(id)
            .ok_or_else(|| ServiceError::NotFound(id.clone()))?;
        Ok(self.engine.analyze(product, snapshot.products(), now)?)
    }

    pub async fn analyze_all(&self, now: DateTime<Utc>) -> Result<Vec<AnalysisResult>, ServiceError> {
        let snapshot = self.snapshot().await;
        self.engine.analyze_all(snapshot.products(), now).map_err(|e| {
            warn!(error = %e, "catalogue analysis failed");
            ServiceError::from(e)
        })
    }

    pub async fn overview(&self, now: DateTime<Utc>) -> Overview {
        Overview::compute(self.snapshot().await.products(), now)
    }

    pub async fn alerts(&self, now: DateTime<Utc>) -> Vec<HealthAlert> {
        priority_alerts(self.snapshot().await.products(), now)
    }

    pub async fn rankings(&self) -> Vec<VelocityRank> {
        velocity_rankings(self.snapshot().await.products())
    }

    /// Marketing suggestions for an existing product.
    pub async fn strategies(
        &self,
        id: &ProductId,
        reason: &str,
    ) -> Result<Vec<MarketingStrategy>, ServiceError> {
        let product = self.get(id).await?;
        Ok(self.advisor.request(&product, reason).await)
    }
}
