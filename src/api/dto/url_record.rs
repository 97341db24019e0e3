//! DTO for stored URL records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// A stored record as returned by `GET /urls`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecordResponse {
    pub original_url: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlRecordResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            slug: record.slug,
            created_at: record.created_at,
        }
    }
}
