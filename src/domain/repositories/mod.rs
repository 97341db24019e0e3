//! Store trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for record storage
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See `tests/repository_url.rs` for the PostgreSQL implementation and the
//! `tests/handler_*.rs` suites, which run against the in-memory store.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
