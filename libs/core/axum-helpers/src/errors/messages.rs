//! Standard error messages for consistent error responses.

pub const VALIDATION_FAILED: &str = "Request validation failed";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
pub const INTERNAL_ERROR: &str = "An unexpected error occurred.";
