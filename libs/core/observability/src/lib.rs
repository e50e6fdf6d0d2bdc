//! Observability utilities for the task API.
//!
//! This crate provides:
//! - Prometheus metrics recording and export
//! - Axum middleware for automatic per-request metrics and logging
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{middleware, routing::get, Router};
//! use observability::{init_metrics, metrics_handler, track_requests};
//!
//! let handle = init_metrics();
//!
//! let app = Router::new()
//!     .route("/metrics", get(metrics_handler))
//!     .with_state(handle.clone())
//!     .layer(middleware::from_fn(track_requests));
//! ```

pub mod middleware;

pub use middleware::track_requests;

// Re-export metrics macros for convenience
pub use metrics::{counter, gauge, histogram};

use axum::extract::State;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

/// Name of the per-request counter, labeled by endpoint and method.
pub const REQUEST_COUNTER: &str = "task_api_requests_total";

/// Name of the per-request latency histogram, labeled by endpoint.
pub const REQUEST_LATENCY: &str = "task_api_request_latency_seconds";

// The metrics crate recorder is process-global by design; the OnceCell keeps
// repeated initialization (tests, accidental double calls) from panicking.
// The returned handle is what apps thread through their state.
static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus metrics recorder and return its render handle.
///
/// Call once at application startup and keep the handle in application state
/// so the `/metrics` route can render from it.
pub fn init_metrics() -> &'static PrometheusHandle {
    METRICS_HANDLE.get_or_init(|| {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .expect("Failed to install Prometheus recorder");

        info!("Prometheus metrics recorder initialized");

        register_metric_descriptions();

        handle
    })
}

/// Axum handler for the /metrics endpoint.
///
/// Renders the current counter/histogram state in the Prometheus text
/// exposition format. The handle comes from router state rather than a
/// module global, so wiring stays explicit.
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}

fn register_metric_descriptions() {
    use metrics::describe_counter;
    use metrics::describe_histogram;

    describe_counter!(REQUEST_COUNTER, "Total number of requests");
    describe_histogram!(REQUEST_LATENCY, "Request latency in seconds");
}
