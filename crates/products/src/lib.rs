//! Product catalogue module.
//!
//! Product records, the closed category set, submission validation, and the
//! copy-on-write catalogue snapshot. Pure domain logic (no IO, no HTTP, no
//! storage).

pub mod catalog;
pub mod product;
pub mod submission;

pub use catalog::ProductCatalog;
pub use product::{Category, Product};
pub use submission::{DEFAULT_DAILY_SALES, ProductSubmission};
