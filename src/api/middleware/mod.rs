//! HTTP middleware for request processing.
//!
//! Provides the CORS policy, error rendering and observability middleware.

pub mod cors;
pub mod errors;
pub mod tracing;
