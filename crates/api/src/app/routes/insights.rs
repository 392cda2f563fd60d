//! Catalogue-wide read views.

use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse, response::Response};

use crate::app::errors;
use crate::app::services::AppServices;

/// Reorder verdict for every product, in catalogue order.
pub async fn analysis(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.catalog.analyze_all(services.now()).await {
        Ok(results) => Json(results).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn overview(Extension(services): Extension<Arc<AppServices>>) -> Response {
    Json(services.catalog.overview(services.now()).await).into_response()
}

pub async fn alerts(Extension(services): Extension<Arc<AppServices>>) -> Response {
    Json(services.catalog.alerts(services.now()).await).into_response()
}

/// Fastest sellers, at most six.
pub async fn rankings(Extension(services): Extension<Arc<AppServices>>) -> Response {
    Json(services.catalog.rankings().await).into_response()
}
