use async_trait::async_trait;

use crate::result::AiError;

/// A text-generation backend that answers with JSON.
#[async_trait]
pub trait GenerativeTextClient: Send + Sync {
    /// Send `prompt`, asking for a JSON response.
    ///
    /// `Ok(None)` means the model answered with no text at all.
    async fn generate_json(&self, prompt: &str) -> Result<Option<String>, AiError>;
}
