use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{messages, ErrorResponse};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        error: "NotFound".to_string(),
        message: messages::NOT_FOUND_RESOURCE.to_string(),
        details: None,
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
