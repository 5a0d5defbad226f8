//! Application state with repository-based storage.
//!
//! This module defines the shared state used by the CLI commands. It holds
//! the cached user repository and the cache behind it as trait objects, and
//! supports different backend combinations via feature flags.

use std::sync::Arc;

use usercache_core::cache::Cache;
use usercache_core::context::Context;
use usercache_core::repository::UserRepository;
use usercache_core::storage::UserStore;

use crate::config::Config;
use crate::storage::CachedUserRepository;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "sqlite"))]
compile_error!("Cannot enable both 'inmemory' and 'sqlite' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'sqlite'");

// Cache features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!("Cannot enable both 'memory' and 'redis' cache features");

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!("Must enable exactly one cache feature: 'memory' or 'redis'");

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// User repository (cached, wraps the durable store).
    pub users: Arc<dyn UserRepository>,
    /// The cache behind `users`, for inspection.
    pub cache: Arc<dyn Cache>,
    pub config: Config,
}

impl AppState {
    /// Wires a store and a cache into the cached repository.
    fn build<S, C>(store: Arc<S>, cache: Arc<C>, config: &Config) -> Self
    where
        S: UserStore + 'static,
        C: Cache + 'static,
    {
        let users = Arc::new(CachedUserRepository::new(
            store,
            cache.clone(),
            config.cache_ttl(),
        ));

        Self {
            users,
            cache,
            config: config.clone(),
        }
    }

    /// A fresh context bounded by the configured operation timeout.
    pub fn operation_context(&self) -> Context {
        Context::background().with_timeout(self.config.operation_timeout())
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

/// Builds the in-memory cache, rejecting a zero capacity.
#[cfg(feature = "memory")]
fn memory_cache(config: &Config) -> anyhow::Result<crate::cache::memory::MemoryCache> {
    anyhow::ensure!(
        config.cache_max_entries > 0,
        "CACHE_MAX_ENTRIES must be greater than zero"
    );
    Ok(crate::cache::memory::MemoryCache::new(config.cache_max_entries))
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::storage::InMemoryUserStore;

    impl AppState {
        /// Creates AppState with an in-memory store and in-memory cache.
        ///
        /// Useful for testing without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryUserStore::new());
            let cache = Arc::new(memory_cache(config)?);

            Ok(Self::build(store, cache, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::InMemoryUserStore;

    impl AppState {
        /// Creates AppState with an in-memory store and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryUserStore::new());
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::build(store, cache, config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::storage::SqliteUserStore;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteUserStore::new(&config.sqlite_path).await?);
            let cache = Arc::new(memory_cache(config)?);

            Ok(Self::build(store, cache, config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::SqliteUserStore;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteUserStore::new(&config.sqlite_path).await?);
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::build(store, cache, config))
        }
    }
}
