use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `POST /api/calculate` — sum volume and weight over the selected product
/// codes and report which box tiers hold the totals.
///
/// The only rejection is a body without a `selectedProducts` array (or no
/// JSON body at all); unknown and duplicate codes are part of the normal
/// contract and never fail.
pub async fn calculate_packing(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(body)) = body else {
        return errors::invalid_input();
    };

    let selection = match dto::selection_codes(&body) {
        Ok(codes) => codes,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let result = boxfit_catalog::calculate(services.catalog(), &selection);

    tracing::debug!(
        selected = selection.len(),
        total_volume = %result.total_volume,
        total_weight = %result.total_weight,
        suitable = result.suitable_boxes.len(),
        "packing calculation"
    );

    (StatusCode::OK, Json(dto::CalculateResponse::from(result))).into_response()
}
