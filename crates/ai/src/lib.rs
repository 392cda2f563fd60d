//! `retailiq-ai`
//!
//! **Responsibility:** marketing suggestions from a generative-language model.
//!
//! This crate sits at the edge of the domain:
//! - It reads products but never mutates them.
//! - It emits **suggestions**, not decisions; the reorder verdict lives in
//!   `retailiq-inventory`.
//! - Callers never see a failure: any problem with the model degrades to a
//!   single static fallback suggestion.

pub mod advisor;
pub mod client;
pub mod gemini;
pub mod prompt;
pub mod result;
pub mod strategy;

pub use advisor::{StrategyAdvisor, StrategyRequestor};
pub use client::GenerativeTextClient;
pub use gemini::{GeminiClient, GeminiConfig};
pub use result::AiError;
pub use strategy::{
    INVENTORY_REVIEW, MarketingStrategy, NEW_INVENTORY_ENTRY, StrategyKind, fallback_strategies,
};
