use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use retailiq_core::ProductId;
use retailiq_products::ProductSubmission;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(submit_product).get(list_products))
        .route("/:id", get(get_product))
        .route("/:id/analysis", get(analyze_product))
        .route("/:id/strategies", post(product_strategies))
}

fn parse_id(raw: &str) -> Result<ProductId, Response> {
    raw.parse::<ProductId>()
        .map_err(errors::domain_error_to_response)
}

pub async fn submit_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.catalog.submit(submission, services.now()).await {
        Ok(submitted) => (StatusCode::CREATED, Json(submitted)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> Response {
    Json(services.catalog.list().await).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.catalog.get(&id).await {
        Ok(product) => Json(product).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn analyze_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.catalog.analyze(&id, services.now()).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Body is optional; an empty body uses the review label, a malformed one is a 400.
pub async fn product_strategies(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let request = match dto::StrategyRequest::from_body(&body) {
        Ok(r) => r,
        Err(e) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string());
        }
    };

    match services.catalog.strategies(&id, request.reason()).await {
        Ok(strategies) => Json(strategies).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
