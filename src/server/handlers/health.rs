use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Serialize;

/// Name reported by the health check
pub const SERVICE_NAME: &str = "mrkdwn";

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub ok: bool,
    pub service: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        ok: true,
        service: SERVICE_NAME,
    })
}

/// `/render` is the old rendering endpoint, everything lives on `/` now
pub async fn redirect_to_root() -> Redirect {
    Redirect::permanent("/")
}

/// Anything without a route
pub async fn handle_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
