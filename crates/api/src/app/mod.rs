//! HTTP API application wiring (Axum router + catalog injection).
//!
//! This folder is structured like:
//! - `services.rs`: handler dependencies, wired once at startup
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use boxfit_catalog::Catalog;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests). The catalog is passed in explicitly so tests can run
/// against fixture data.
pub fn build_app(catalog: Catalog) -> Router {
    let services = Arc::new(services::AppServices::new(catalog));

    routes::router().layer(Extension(services))
}
