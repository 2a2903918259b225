use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::Extension,
    response::IntoResponse,
};

use supplyrisk_pipeline::{BasicRequest, ExtendedRequest};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `POST /predict`: basic model, 3 features.
pub async fn predict_basic(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let body: dto::BasicPredictRequest = match dto::parse_body(&body) {
        Ok(v) => v,
        Err(e) => return errors::body_error_to_response(e),
    };

    match services.basic.run(&BasicRequest::from(body)) {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => errors::pipeline_error_to_response(e),
    }
}

/// `POST /predictBody`: extended model, 5 features.
pub async fn predict_extended(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let body: dto::ExtendedPredictRequest = match dto::parse_body(&body) {
        Ok(v) => v,
        Err(e) => return errors::body_error_to_response(e),
    };

    match services.extended.run(&ExtendedRequest::from(body)) {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => errors::pipeline_error_to_response(e),
    }
}
