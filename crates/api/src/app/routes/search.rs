use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::dto;
use crate::app::services::AppServices;

/// `GET /api/search?q=...` — case-insensitive substring search over product
/// code and name. Empty or absent `q` returns an empty array.
pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    let query = params.q.unwrap_or_default();
    let hits = boxfit_catalog::search(services.catalog(), &query);

    tracing::debug!(query = %query, hits = hits.len(), "product search");

    (StatusCode::OK, Json(hits)).into_response()
}
