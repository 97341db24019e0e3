//! Store trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for URL records.
///
/// Both `slug` and `original_url` are unique across the store. Implementations
/// enforce this on [`insert`](UrlRepository::insert) rather than relying on
/// callers to check first.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record if neither its slug nor its URL is taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record with the same slug or the
    /// same original URL already exists.
    ///
    /// Returns [`AppError::Store`] on store errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its normalized original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, AppError>;

    /// Returns every record, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    async fn count(&self) -> Result<i64, AppError>;
}
