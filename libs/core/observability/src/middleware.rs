//! Axum middleware for automatic HTTP request metrics and logging.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{Request, Response},
    middleware::Next,
};
use metrics::{counter, histogram};
use std::time::Instant;

use crate::{REQUEST_COUNTER, REQUEST_LATENCY};

/// Middleware function recording metrics and one log line per request.
///
/// Records:
/// - `task_api_requests_total` - counter with endpoint, method labels
/// - `task_api_request_latency_seconds` - histogram with endpoint label
///
/// Recording happens after `Next::run` returns, and `Next::run` resolves on
/// every exit path (handler errors are already converted to responses by
/// axum), so failed requests are counted and timed too.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{middleware, Router};
/// use observability::track_requests;
///
/// let app: Router = Router::new()
///     .layer(middleware::from_fn(track_requests));
/// ```
pub async fn track_requests(
    matched_path: Option<MatchedPath>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let start = Instant::now();
    let method = request.method().to_string();
    // Use the route template when matched so path labels stay low-cardinality
    let endpoint = matched_path
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status().as_u16();

    counter!(
        REQUEST_COUNTER,
        "endpoint" => endpoint.clone(),
        "method" => method.clone()
    )
    .increment(1);

    histogram!(
        REQUEST_LATENCY,
        "endpoint" => endpoint.clone()
    )
    .record(duration.as_secs_f64());

    tracing::info!(
        method = %method,
        path = %endpoint,
        status = status,
        duration_ms = duration.as_millis() as u64,
        "handled request"
    );

    response
}
