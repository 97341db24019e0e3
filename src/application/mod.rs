//! Application layer services implementing business logic.
//!
//! Services consume store traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::condense_service::CondenseService`] - Slug assignment, lookup and listing

pub mod services;
