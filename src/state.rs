//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::CondenseService;
use crate::config::{Config, Environment};
use crate::domain::repositories::UrlRepository;

/// Service handle passed explicitly to the router.
///
/// Cloning is cheap; all clones share one [`CondenseService`].
#[derive(Clone)]
pub struct AppState {
    pub condense_service: Arc<CondenseService>,
    /// Base of returned short links, without a trailing slash.
    pub base_url: Arc<str>,
    pub environment: Environment,
    pub cors_allowed_origins: Arc<[String]>,
}

impl AppState {
    pub fn new(
        condense_service: Arc<CondenseService>,
        base_url: &str,
        environment: Environment,
        cors_allowed_origins: Vec<String>,
    ) -> Self {
        Self {
            condense_service,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            environment,
            cors_allowed_origins: cors_allowed_origins.into(),
        }
    }

    /// Builds state over `repository` using the settings in `config`.
    pub fn from_config(repository: Arc<dyn UrlRepository>, config: &Config) -> Self {
        Self::new(
            Arc::new(CondenseService::new(repository)),
            &config.base_url,
            config.environment,
            config.cors_allowed_origins.clone(),
        )
    }
}
