use async_trait::async_trait;
use tracing::{debug, warn};

use retailiq_products::Product;

use crate::client::GenerativeTextClient;
use crate::prompt::build_prompt;
use crate::result::AiError;
use crate::strategy::{MarketingStrategy, fallback_strategies};

/// Source of marketing suggestions for a product.
///
/// Infallible by contract: implementations absorb every failure.
#[async_trait]
pub trait StrategyRequestor: Send + Sync {
    async fn request(&self, product: &Product, reason: &str) -> Vec<MarketingStrategy>;
}

/// Requests suggestions from a generative model.
///
/// - Model returns a JSON array → those strategies (usually four).
/// - Model returns no text → empty list.
/// - Anything else (not configured, transport, status, bad JSON) → the
///   single fallback suggestion.
///
/// No retry, no timeout beyond the client's own.
#[derive(Debug, Clone)]
pub struct StrategyAdvisor<C> {
    client: C,
}

impl<C: GenerativeTextClient> StrategyAdvisor<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    async fn try_request(
        &self,
        product: &Product,
        reason: &str,
    ) -> Result<Vec<MarketingStrategy>, AiError> {
        let prompt = build_prompt(product, reason);
        match self.client.generate_json(&prompt).await? {
            Some(text) => parse_strategies(&text),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl<C: GenerativeTextClient> StrategyRequestor for StrategyAdvisor<C> {
    async fn request(&self, product: &Product, reason: &str) -> Vec<MarketingStrategy> {
        match self.try_request(product, reason).await {
            Ok(strategies) => {
                debug!(product_id = %product.id, count = strategies.len(), "marketing strategies generated");
                strategies
            }
            Err(err) => {
                warn!(product_id = %product.id, reason, error = %err, "strategy request failed; using fallback");
                fallback_strategies()
            }
        }
    }
}

/// Parse the model's JSON array, tolerating a surrounding Markdown code fence.
fn parse_strategies(text: &str) -> Result<Vec<MarketingStrategy>, AiError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed);

    serde_json::from_str(body.trim()).map_err(|e| AiError::InvalidResponse(e.to_string()))
}
