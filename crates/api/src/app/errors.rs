use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use retailiq_core::DomainError;
use retailiq_infra::ServiceError;
use retailiq_inventory::DecisionError;

pub fn service_error_to_response(err: ServiceError) -> Response {
    match err {
        ServiceError::Domain(DomainError::Validation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        ServiceError::Domain(DomainError::InvalidProduct(msg))
        | ServiceError::Decision(DecisionError::InvalidProduct(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_product", msg)
        }
        ServiceError::Domain(DomainError::InvalidId(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_id", msg)
        }
        ServiceError::NotFound(id) => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("product {id} not found"))
        }
        ServiceError::Decision(DecisionError::InvalidPolicy(msg)) => {
            error!(error = %msg, "reorder policy rejected");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "invalid_policy", msg)
        }
        ServiceError::Repository(e) => {
            error!(error = %e, "catalogue storage failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", e.to_string())
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> Response {
    service_error_to_response(ServiceError::Domain(err))
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> Response {
    json_error(StatusCode::BAD_REQUEST, "validation_error", rejection.body_text())
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use retailiq_infra::RepositoryError;

    #[test]
    fn maps_status_codes() {
        let cases = [
            (ServiceError::Domain(DomainError::validation("x")), StatusCode::BAD_REQUEST),
            (ServiceError::Domain(DomainError::invalid_product("x")), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound("7".parse().unwrap()), StatusCode::NOT_FOUND),
            (
                ServiceError::Repository(RepositoryError::Storage("disk".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(service_error_to_response(err).status(), status);
        }
    }
}
