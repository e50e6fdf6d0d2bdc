//! Application state management.
//!
//! The explicit state object replaces module globals: the Prometheus render
//! handle is constructed once at startup and handed to the routes that need
//! it via `with_state`.

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared application state.
///
/// Cloned for each handler; the handle is an Arc internally, so clones are
/// cheap.
#[derive(Clone)]
pub struct AppState {
    /// Render handle for the /metrics endpoint
    pub metrics: PrometheusHandle,
}
