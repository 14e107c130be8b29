use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use boxfit_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidInput(msg) => {
            tracing::debug!(%msg, "rejected request body");
            invalid_input()
        }
    }
}

/// The fixed 400 body the frontend matches on, byte-for-byte.
pub fn invalid_input() -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({ "error": "Invalid input" })),
    )
        .into_response()
}
