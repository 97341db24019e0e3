//! In-process URL record store.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// A store that keeps records in memory, in insertion order.
///
/// Applies the same uniqueness rules as the PostgreSQL store: the
/// check-and-insert happens under one lock, so concurrent inserts of the
/// same slug or URL yield exactly one record and one [`AppError::Conflict`]
/// per loser.
///
/// # Use Cases
///
/// - HTTP integration tests without a database
/// - Embedding the service in other binaries
#[derive(Default)]
pub struct MemoryUrlRepository {
    records: Mutex<Vec<UrlRecord>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<std::sync::MutexGuard<'_, Vec<UrlRecord>>, AppError> {
        self.records
            .lock()
            .map_err(|_| AppError::internal("In-memory store lock poisoned"))
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut records = self.records()?;

        if records.iter().any(|r| r.slug == new_record.slug) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                Some("urls_slug_key".to_string()),
            ));
        }
        if records
            .iter()
            .any(|r| r.original_url == new_record.original_url)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                Some("urls_original_url_key".to_string()),
            ));
        }

        let record = UrlRecord::new(new_record.original_url, new_record.slug, Utc::now());
        records.push(record.clone());

        Ok(record)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.records()?.iter().find(|r| r.slug == slug).cloned())
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .records()?
            .iter()
            .find(|r| r.original_url == original_url)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        Ok(self.records()?.clone())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.records()?.len() as i64)
    }
}
