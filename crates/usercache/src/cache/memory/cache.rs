//! In-memory cache implementation with LRU eviction.
//!
//! Provides a thread-safe in-memory cache with TTL support using
//! tokio synchronization primitives and LRU eviction policy.
//!
//! Value and expiration are written together under one lock, so an entry
//! is never observable without its TTL. Expired entries read as absent and
//! are dropped the next time they are touched.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use usercache_core::cache::{Cache, Result};
use usercache_core::context::Context;

/// Shortest TTL the cache accepts; shorter ones are rounded up.
const MIN_TTL: Duration = Duration::from_millis(1);

/// Longest TTL the cache honors; longer ones are clamped.
const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// A single cache entry with its expiration.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Duration) -> Self {
        let now = Instant::now();
        let ttl = ttl.clamp(MIN_TTL, MAX_TTL);
        Self {
            value,
            // Instant addition panics on overflow
            expires_at: now.checked_add(ttl).unwrap_or(now + MIN_TTL),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

/// In-memory cache implementation with LRU eviction.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
/// Uses LRU eviction to limit memory usage when max_entries is reached.
/// Cloning shares the underlying store.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache with LRU eviction.
    ///
    /// # Arguments
    ///
    /// * `max_entries` - Maximum number of entries before LRU eviction kicks in.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Number of stored entries, including expired ones not yet dropped.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Removes every entry.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, ctx: &Context, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = ctx.run(self.store.write()).await?;

        // get promotes the key in LRU order
        let expired = match store.get(key) {
            Some(entry) => entry.is_expired(),
            None => return Ok(None),
        };
        if expired {
            store.pop(key);
            return Ok(None);
        }

        Ok(store.peek(key).map(|entry| entry.value.clone()))
    }

    async fn set_with_ttl(
        &self,
        ctx: &Context,
        key: &str,
        value: &[u8],
        ttl: Duration,
    ) -> Result<()> {
        let mut store = ctx.run(self.store.write()).await?;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }

    async fn delete(&self, ctx: &Context, key: &str) -> Result<()> {
        let mut store = ctx.run(self.store.write()).await?;
        store.pop(key);
        Ok(())
    }

    async fn exists(&self, ctx: &Context, key: &str) -> Result<bool> {
        let mut store = ctx.run(self.store.write()).await?;

        // peek does not count as a use for LRU ordering
        match store.peek(key).map(CacheEntry::is_expired) {
            Some(true) => {
                store.pop(key);
                Ok(false)
            }
            Some(false) => Ok(true),
            None => Ok(false),
        }
    }

    async fn ttl(&self, ctx: &Context, key: &str) -> Result<Option<Duration>> {
        let mut store = ctx.run(self.store.write()).await?;

        match store.peek(key).map(|entry| (entry.is_expired(), entry.remaining())) {
            Some((true, _)) => {
                store.pop(key);
                Ok(None)
            }
            Some((false, remaining)) => Ok(Some(remaining)),
            None => Ok(None),
        }
    }
}
