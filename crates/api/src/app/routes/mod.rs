use axum::{Router, routing::post};

pub mod predict;
pub mod system;

/// Router for the prediction endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/predict", post(predict::predict_basic))
        .route("/predictBody", post(predict::predict_extended))
}
