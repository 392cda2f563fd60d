use thiserror::Error;

/// Failure talking to the generative model.
///
/// Never crosses `StrategyRequestor::request`; it is logged and replaced by
/// the fallback suggestion there.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("generative client not configured: {0}")]
    NotConfigured(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("invalid model response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for AiError {
    fn from(value: reqwest::Error) -> Self {
        AiError::Transport(value.to_string())
    }
}
