//! Condense workflow: slug assignment, lookup and listing.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::slug_generator::{DEFAULT_SLUG_LENGTH, generate_slug};
use crate::utils::url_normalizer::normalize_url;

/// Bounds on slug generation.
///
/// Generation starts at `initial_length`. After `attempts_per_length`
/// collisions at one length the slug grows by a character, up to
/// `max_length`; past that, condensing fails instead of looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugPolicy {
    pub initial_length: usize,
    pub max_length: usize,
    pub attempts_per_length: usize,
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self {
            initial_length: DEFAULT_SLUG_LENGTH,
            max_length: 12,
            attempts_per_length: 10,
        }
    }
}

/// Service for creating and resolving short links.
///
/// The store is the arbiter of uniqueness: lookups before the insert keep
/// the common path cheap, and an insert conflict is resolved by re-reading
/// the URL (another request won the race) or regenerating the slug.
pub struct CondenseService {
    repository: Arc<dyn UrlRepository>,
    policy: SlugPolicy,
}

impl CondenseService {
    /// Creates a service with the default [`SlugPolicy`].
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self::with_policy(repository, SlugPolicy::default())
    }

    pub fn with_policy(repository: Arc<dyn UrlRepository>, policy: SlugPolicy) -> Self {
        Self { repository, policy }
    }

    /// Returns the record for `url`, creating it with a fresh slug if needed.
    ///
    /// Condensing the same URL (modulo one trailing slash) always yields the
    /// same record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty.
    /// Returns [`AppError::Internal`] if no free slug was found within the policy.
    /// Returns [`AppError::Store`] on store errors.
    pub async fn condense(&self, url: &str) -> Result<UrlRecord, AppError> {
        let original_url = normalize_url(url).map_err(|e| AppError::validation(e.to_string()))?;

        if let Some(existing) = self
            .repository
            .find_by_original_url(&original_url)
            .await?
        {
            debug!(slug = %existing.slug, "URL already condensed");
            return Ok(existing);
        }

        self.assign_slug(original_url).await
    }

    /// Looks up the record a slug points to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    pub async fn resolve(&self, slug: &str) -> Result<Option<UrlRecord>, AppError> {
        self.repository.find_by_slug(slug).await
    }

    /// Returns every stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store holds no records.
    /// Returns [`AppError::Store`] on store errors.
    pub async fn list(&self) -> Result<Vec<UrlRecord>, AppError> {
        let records = self.repository.list_all().await?;

        if records.is_empty() {
            return Err(AppError::not_found("No urls found."));
        }

        Ok(records)
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    async fn assign_slug(&self, original_url: String) -> Result<UrlRecord, AppError> {
        let SlugPolicy {
            initial_length,
            max_length,
            attempts_per_length,
        } = self.policy;

        for length in initial_length..=max_length {
            for _ in 0..attempts_per_length {
                let slug = generate_slug(length);

                if self.repository.find_by_slug(&slug).await?.is_some() {
                    debug!(%slug, "Slug collision, regenerating");
                    continue;
                }

                let new_record = NewUrlRecord {
                    original_url: original_url.clone(),
                    slug,
                };

                match self.repository.insert(new_record).await {
                    Ok(record) => {
                        info!(slug = %record.slug, url = %record.original_url, "Created short link");
                        return Ok(record);
                    }
                    Err(AppError::Conflict { constraint, .. }) => {
                        if let Some(existing) = self
                            .repository
                            .find_by_original_url(&original_url)
                            .await?
                        {
                            debug!(slug = %existing.slug, "URL condensed concurrently");
                            return Ok(existing);
                        }
                        debug!(?constraint, "Slug taken concurrently, regenerating");
                    }
                    Err(e) => return Err(e),
                }
            }

            if length < max_length {
                warn!(
                    length,
                    attempts = attempts_per_length,
                    "Slug space congested, growing slug length"
                );
            }
        }

        Err(AppError::internal("Failed to generate a unique slug"))
    }
}
