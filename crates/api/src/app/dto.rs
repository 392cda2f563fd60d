use serde::Deserialize;

use retailiq_ai::INVENTORY_REVIEW;

/// Body of `POST /products/:id/strategies`. Empty body is allowed.
#[derive(Debug, Default, Deserialize)]
pub struct StrategyRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

impl StrategyRequest {
    /// An empty (or whitespace-only) body means "no reason given".
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }

    pub fn reason(&self) -> &str {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(INVENTORY_REVIEW)
    }
}
