//! Shared axum building blocks for HTTP services.
//!
//! Provides the standard error response envelope, a validating JSON
//! extractor, the liveness endpoint, and server startup with graceful
//! shutdown.

pub mod errors;
pub mod extractors;
pub mod health;
pub mod server;
pub mod shutdown;

pub use errors::{AppError, ErrorResponse};
pub use extractors::ValidatedJson;
pub use health::{health_router, HealthResponse};
pub use server::create_app;
pub use shutdown::shutdown_signal;
