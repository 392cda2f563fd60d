use axum::{Router, routing::get};

pub mod insights;
pub mod products;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .route("/analysis", get(insights::analysis))
        .route("/overview", get(insights::overview))
        .route("/alerts", get(insights::alerts))
        .route("/rankings", get(insights::rankings))
}
