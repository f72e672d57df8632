#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use message_board::api;
use message_board::application::services::{MessageCache, MessageService};
use message_board::domain::entities::{Message, NewMessage};
use message_board::domain::repositories::MessageRepository;
use message_board::error::AppError;
use message_board::infrastructure::cache::{CacheError, CacheResult, CacheService, MemoryCache};
use message_board::infrastructure::persistence::MemoryMessageRepository;
use message_board::routes::app_router;
use message_board::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

pub const TEST_TTL: Duration = Duration::from_secs(600);

/// In-memory store that counts reads and can be switched into a failing state.
#[derive(Default)]
pub struct CountingRepository {
    inner: MemoryMessageRepository,
    list_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    failing: AtomicBool,
}

impl CountingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn stored(&self) -> Vec<Message> {
        self.inner.list_all().await.unwrap()
    }
}

#[async_trait]
impl MessageRepository for CountingRepository {
    async fn list_all(&self) -> Result<Vec<Message>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::storage("connection refused"));
        }
        self.inner.list_all().await
    }

    async fn insert(&self, new_message: NewMessage) -> Result<Message, AppError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::storage("connection refused"));
        }
        self.inner.insert(new_message).await
    }
}

/// Cache backend whose every operation fails, as if Redis went away.
pub struct UnavailableCache;

#[async_trait]
impl CacheService for UnavailableCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> CacheResult<()> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

pub fn create_message_cache(
    repo: Arc<CountingRepository>,
    cache: Arc<dyn CacheService>,
) -> MessageCache<CountingRepository> {
    MessageCache::new(repo, cache, TEST_TTL)
}

pub fn create_test_state(repo: Arc<CountingRepository>, cache: Arc<dyn CacheService>) -> AppState {
    let repo: Arc<dyn MessageRepository> = repo;
    let message_cache = MessageCache::new(repo.clone(), cache, TEST_TTL);
    let message_service = Arc::new(MessageService::new(repo, message_cache));
    AppState::new(message_service)
}

/// Serves the `/api` routes over a counting store and an in-memory cache.
pub fn create_test_server() -> (TestServer, Arc<CountingRepository>) {
    create_test_server_with_cache(Arc::new(MemoryCache::new()))
}

pub fn create_test_server_with_cache(
    cache: Arc<dyn CacheService>,
) -> (TestServer, Arc<CountingRepository>) {
    let repo = Arc::new(CountingRepository::new());
    let state = create_test_state(repo.clone(), cache);
    let app = Router::new()
        .nest("/api", api::routes::routes())
        .with_state(state);

    (TestServer::new(app).unwrap(), repo)
}

/// Serves the full application router, middleware included.
pub fn create_app_server() -> (TestServer, Arc<CountingRepository>) {
    let repo = Arc::new(CountingRepository::new());
    let state = create_test_state(repo.clone(), Arc::new(MemoryCache::new()));
    let app = ServiceExt::<Request>::into_make_service(app_router(state));

    (TestServer::new(app).unwrap(), repo)
}
