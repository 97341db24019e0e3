//! URL record entity: one original URL and the slug that redirects to it.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// Records are created once by the condense workflow and never mutated or
/// deleted. `original_url` is already normalized when stored.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub original_url: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    pub fn new(original_url: String, slug: String, created_at: DateTime<Utc>) -> Self {
        Self {
            original_url,
            slug,
            created_at,
        }
    }

    /// Full short link for this record under `base_url`.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.slug)
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UrlRecord {
        UrlRecord::new(
            "https://example.com".to_string(),
            "0a1b2c3d".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_short_url() {
        let record = record();
        assert_eq!(record.short_url("https://cndns.io"), "https://cndns.io/0a1b2c3d");
        assert_eq!(
            record.short_url("https://cndns.io/"),
            "https://cndns.io/0a1b2c3d"
        );
    }
}
