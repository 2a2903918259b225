use axum::http::StatusCode;

/// Identification string served at `/`.
pub const SERVICE_BANNER: &str = "Supply Chain Risk Prediction API";

pub async fn home() -> &'static str {
    SERVICE_BANNER
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
