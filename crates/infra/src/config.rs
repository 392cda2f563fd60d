//! Configuration loading and representation.
//!
//! Everything comes from environment variables; every variable has a default
//! so a bare `cargo run` starts a working (if AI-less) server.

use std::path::PathBuf;

use anyhow::{Context, bail};
use tracing::warn;

use retailiq_ai::GeminiConfig;
use retailiq_ai::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Where the catalogue is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local; lost on exit.
    InMemory,
    /// sqlx SQLite URL, e.g. `sqlite:///var/lib/retailiq/retailiq.db`.
    Sqlite(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub storage: StorageBackend,
    /// Write the demo catalogue when storage has never been written.
    pub seed_when_empty: bool,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Read `RETAILIQ_*` and `GEMINI_*` variables from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = get("RETAILIQ_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let storage = match get("RETAILIQ_DATABASE_URL") {
            Some(url) if url.eq_ignore_ascii_case("memory") => StorageBackend::InMemory,
            Some(url) if url.starts_with("sqlite:") => StorageBackend::Sqlite(url),
            Some(url) => bail!("RETAILIQ_DATABASE_URL must be `memory` or a sqlite: URL (got {url:?})"),
            None => StorageBackend::Sqlite(default_database_url()),
        };

        let seed_when_empty = match get("RETAILIQ_SEED") {
            None => true,
            Some(v) => parse_bool(&v).context("RETAILIQ_SEED must be true/false")?,
        };

        let api_key = get("GEMINI_API_KEY").or_else(|| get("API_KEY")).unwrap_or_default();
        if api_key.is_empty() {
            warn!("GEMINI_API_KEY not set; marketing strategies will use the static fallback");
        }

        let gemini = GeminiConfig {
            api_key,
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };

        Ok(Self {
            bind_addr,
            storage,
            seed_when_empty,
            gemini,
        })
    }
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("not a boolean: {other:?}"),
    }
}

/// `retailiq.db` under the user data directory, or the working directory
/// when there is none.
fn default_database_url() -> String {
    let path = dirs::data_dir()
        .map(|d| d.join("retailiq"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("retailiq.db");
    format!("sqlite://{}", path.display())
}
