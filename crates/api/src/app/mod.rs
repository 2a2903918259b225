//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: model loading and the pipelines handlers call into
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and lenient JSON coercion
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// Services are built by the caller so models are loaded (or stubbed) before
/// any route exists.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/", get(routes::system::home))
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id))
                .layer(Extension(services)),
        )
}
