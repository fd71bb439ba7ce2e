//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the registry handle shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use cookbook_infra::Registry;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The registry is owned by the caller so tests can inspect it directly.
pub fn build_app(registry: Arc<dyn Registry>) -> Router {
    let services = Arc::new(services::AppServices::new(registry));

    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_logging)))
}
