#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use condensed::application::services::CondenseService;
use condensed::config::Environment;
use condensed::domain::entities::{NewUrlRecord, UrlRecord};
use condensed::domain::repositories::UrlRepository;
use condensed::error::AppError;
use condensed::infrastructure::persistence::MemoryUrlRepository;
use condensed::routes::app_router;
use condensed::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Barrier;

pub const BASE_URL: &str = "https://cndns.io";
pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const FRONT_END_ORIGIN: &str = "https://condensed.netlify.app";

pub fn create_test_state_with(
    repository: Arc<dyn UrlRepository>,
    environment: Environment,
) -> AppState {
    AppState::new(
        Arc::new(CondenseService::new(repository)),
        BASE_URL,
        environment,
        vec![ALLOWED_ORIGIN.to_string(), FRONT_END_ORIGIN.to_string()],
    )
}

pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let state = create_test_state_with(repository.clone(), Environment::Production);
    (state, repository)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();
    (server, repository)
}

pub async fn create_test_record(repository: &MemoryUrlRepository, url: &str, slug: &str) {
    repository
        .insert(NewUrlRecord {
            original_url: url.to_string(),
            slug: slug.to_string(),
        })
        .await
        .unwrap();
}

pub fn is_hex_slug(slug: &str) -> bool {
    slug.len() == 8 && slug.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// In-memory store that holds the first `parties` URL lookups at a barrier,
/// so that many condense requests miss the existing-record check together
/// and race on insert.
pub struct RacingUrlRepository {
    inner: MemoryUrlRepository,
    barrier: Barrier,
    parties: usize,
    lookups: AtomicUsize,
    inserts: AtomicUsize,
}

impl RacingUrlRepository {
    pub fn new(parties: usize) -> Self {
        Self {
            inner: MemoryUrlRepository::new(),
            barrier: Barrier::new(parties),
            parties,
            lookups: AtomicUsize::new(0),
            inserts: AtomicUsize::new(0),
        }
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UrlRepository for RacingUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(new_record).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, AppError> {
        self.inner.find_by_slug(slug).await
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let found = self.inner.find_by_original_url(original_url).await?;

        if self.lookups.fetch_add(1, Ordering::SeqCst) < self.parties {
            self.barrier.wait().await;
        }

        Ok(found)
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.inner.list_all().await
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.inner.count().await
    }
}
