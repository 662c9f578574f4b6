//! Redis distributed cache implementation
//!
//! Stores route records in Redis so multiple instances share one cache.
//! Entries are written without expiration, matching the route cache's
//! contract; stale routes are removed by external invalidation.

use std::sync::atomic::{AtomicU64, Ordering};

use application::{
    error::ApplicationError,
    ports::{CachePort, CacheStats},
};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use tracing::{debug, instrument};

/// Redis-backed cache
///
/// Uses a multiplexed async connection for efficient connection reuse.
/// Hit/miss counters are tracked per instance; the entry count reported
/// by [`CachePort::stats`] reflects the last observed DBSIZE.
pub struct RedisCache {
    client: Client,
    hits: AtomicU64,
    misses: AtomicU64,
    entries: AtomicU64,
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

impl RedisCache {
    /// Create a new Redis cache from a connection URL
    /// (e.g. `redis://localhost:6379`)
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed. The connection itself
    /// is established lazily on first use.
    pub fn new(url: &str) -> Result<Self, ApplicationError> {
        let client = Client::open(url)
            .map_err(|e| ApplicationError::Cache(format!("Invalid Redis URL: {e}")))?;

        Ok(Self {
            client,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            entries: AtomicU64::new(0),
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, ApplicationError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| ApplicationError::Cache(format!("Redis connection failed: {e}")))
    }

    async fn refresh_entry_count(&self, conn: &mut MultiplexedConnection) {
        if let Ok(dbsize) = redis::cmd("DBSIZE").query_async::<u64>(conn).await {
            self.entries.store(dbsize, Ordering::Relaxed);
        }
    }
}

#[async_trait]
impl CachePort for RedisCache {
    #[instrument(skip(self), level = "debug")]
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        let mut conn = self.connection().await?;

        match conn.get::<_, Option<Vec<u8>>>(key).await {
            Ok(Some(bytes)) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "Cache hit");
                Ok(Some(bytes))
            },
            Ok(None) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "Cache miss");
                Ok(None)
            },
            Err(e) => Err(ApplicationError::Cache(format!("Redis GET failed: {e}"))),
        }
    }

    #[instrument(skip(self, value), level = "debug")]
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError> {
        let mut conn = self.connection().await?;

        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| ApplicationError::Cache(format!("Redis SET failed: {e}")))?;

        self.refresh_entry_count(&mut conn).await;
        debug!(key = %key, "Cache set");
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn invalidate(&self, key: &str) -> Result<(), ApplicationError> {
        let mut conn = self.connection().await?;

        conn.del::<_, ()>(key)
            .await
            .map_err(|e| ApplicationError::Cache(format!("Redis DEL failed: {e}")))?;

        self.refresh_entry_count(&mut conn).await;
        debug!(key = %key, "Cache invalidated");
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn exists(&self, key: &str) -> Result<bool, ApplicationError> {
        let mut conn = self.connection().await?;

        let count: i32 = conn
            .exists(key)
            .await
            .map_err(|e| ApplicationError::Cache(format!("Redis EXISTS failed: {e}")))?;
        Ok(count > 0)
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.load(Ordering::Relaxed),
        }
    }
}
