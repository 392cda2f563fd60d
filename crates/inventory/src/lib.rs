//! Inventory health module.
//!
//! Reorder/risk decisions, dashboard overview figures, priority health
//! alerts and the velocity leaderboard, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage). Every date-sensitive function
//! takes "now" as a parameter.

pub mod alerts;
pub mod analysis;
pub mod overview;
pub mod policy;
pub mod rankings;
pub mod reorder;

pub use alerts::{HealthAlert, ShelfStatus, priority_alerts};
pub use analysis::{AnalysisResult, DecisionError, RiskLevel};
pub use overview::{CategoryFigure, Overview};
pub use policy::ReorderPolicy;
pub use rankings::{VelocityRank, velocity_rankings};
pub use reorder::ReorderEngine;
