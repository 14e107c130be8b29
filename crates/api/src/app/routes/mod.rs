use axum::{
    routing::{get, post},
    Router,
};

pub mod packing;
pub mod pages;
pub mod search;
pub mod system;

/// Router for the whole service: landing page, health, and the two API
/// operations.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(system::health))
        .route("/api/search", get(search::search_products))
        .route("/api/calculate", post(packing::calculate_packing))
}
