use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use supplyrisk_pipeline::PipelineError;

pub fn pipeline_error_to_response(err: PipelineError) -> axum::response::Response {
    match err {
        PipelineError::Invalid(e) => {
            tracing::warn!(error = %e, "rejected prediction request");
            json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string())
        }
        PipelineError::Model(e) => {
            tracing::error!(error = %e, "model invocation failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "model_error", e.to_string())
        }
    }
}

pub fn body_error_to_response(err: serde_json::Error) -> axum::response::Response {
    let code = match err.classify() {
        serde_json::error::Category::Syntax | serde_json::error::Category::Eof => "invalid_json",
        serde_json::error::Category::Data | serde_json::error::Category::Io => "invalid_body",
    };
    tracing::warn!(error = %err, code, "malformed request body");
    json_error(StatusCode::BAD_REQUEST, code, err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
