use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint handler.
///
/// Returns a fixed liveness payload. Deliberately does not touch any
/// dependency - this endpoint answers 200 whenever the process is running,
/// even if the database is down.
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}

/// Creates a router with the /health endpoint.
///
/// # Example
/// ```ignore
/// use axum_helpers::health_router;
///
/// let app = axum::Router::new().merge(health_router());
/// ```
pub fn health_router() -> Router {
    Router::new().route("/health", get(health_handler))
}
