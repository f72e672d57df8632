//! Read-through cache for the full message list.

use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use tracing::{debug, warn};

use crate::domain::entities::Message;
use crate::domain::repositories::MessageRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Cache key holding the serialized list of all messages.
pub const ALL_MESSAGES_KEY: &str = "all-messages";

/// Default lifetime of the cached list.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Serves the complete message list from a cache, loading it from the store on
/// a miss.
///
/// There is exactly one entry (under [`ALL_MESSAGES_KEY`]). It is replaced
/// wholesale on repopulation and removed by [`MessageCache::invalidate`],
/// which the write path calls after every successful insert.
///
/// # Degradation
///
/// Cache store failures are never surfaced. A failed read counts as a miss,
/// a failed write or delete is logged and ignored, and an entry that cannot be
/// decoded is discarded. With [`crate::infrastructure::cache::NullCache`]
/// installed every call passes straight through to the store.
///
/// # Concurrency
///
/// Concurrent misses each query the store. A miss that started before an
/// invalidation can write a pre-insert snapshot back; that entry lives at most
/// one TTL.
pub struct MessageCache<R: MessageRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    ttl: Duration,
}

impl<R: MessageRepository + ?Sized> MessageCache<R> {
    /// Creates a cache layer in front of `repository`.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    /// Returns all messages, from the cache when possible.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the entry is missing and the store
    /// query fails. Nothing is cached in that case.
    pub async fn get(&self) -> Result<Vec<Message>, AppError> {
        match self.cache.get(ALL_MESSAGES_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Message>>(&raw) {
                Ok(messages) => {
                    debug!("Cache HIT: {} ({} messages)", ALL_MESSAGES_KEY, messages.len());
                    counter!("message_cache_hits_total").increment(1);
                    return Ok(messages);
                }
                Err(e) => {
                    warn!("Discarding undecodable cache entry {}: {}", ALL_MESSAGES_KEY, e);
                    counter!("message_cache_errors_total").increment(1);
                }
            },
            Ok(None) => debug!("Cache MISS: {}", ALL_MESSAGES_KEY),
            Err(e) => {
                warn!("Cache read failed, reading from store: {}", e);
                counter!("message_cache_errors_total").increment(1);
            }
        }
        counter!("message_cache_misses_total").increment(1);

        let messages = self.repository.list_all().await?;
        self.populate(&messages).await;
        Ok(messages)
    }

    /// Removes the cached list.
    ///
    /// Deleting an absent entry is fine. A failing cache store makes this a
    /// logged no-op.
    pub async fn invalidate(&self) {
        match self.cache.delete(ALL_MESSAGES_KEY).await {
            Ok(()) => {
                debug!("Cache INVALIDATE: {}", ALL_MESSAGES_KEY);
                counter!("message_cache_invalidations_total").increment(1);
            }
            Err(e) => {
                warn!("Cache invalidation failed: {}", e);
                counter!("message_cache_errors_total").increment(1);
            }
        }
    }

    /// Checks that the underlying cache store is reachable.
    pub async fn health_check(&self) -> bool {
        self.cache.health_check().await
    }

    /// Name of the cache backend in use.
    pub fn backend(&self) -> &'static str {
        self.cache.backend()
    }

    async fn populate(&self, messages: &[Message]) {
        let encoded = match serde_json::to_string(messages) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Failed to encode message list for cache: {}", e);
                return;
            }
        };

        match self.cache.set(ALL_MESSAGES_KEY, &encoded, self.ttl).await {
            Ok(()) => debug!(
                "Cache SET: {} ({} messages, TTL: {}s)",
                ALL_MESSAGES_KEY,
                messages.len(),
                self.ttl.as_secs()
            ),
            Err(e) => {
                warn!("Cache write failed: {}", e);
                counter!("message_cache_errors_total").increment(1);
            }
        }
    }
}
