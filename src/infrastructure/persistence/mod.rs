//! Store implementations.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - PostgreSQL store over SQLx
//! - [`MemoryUrlRepository`] - In-process store with the same uniqueness rules

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
