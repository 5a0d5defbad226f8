//! Cached repository decorator.
//!
//! Wraps a durable `UserStore` with a `Cache` using the cache-aside pattern:
//!
//! - **Reads**: Check cache first, on miss fetch from the store and populate cache
//! - **Writes**: Persist to the store, then invalidate the cached entry
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let store = Arc::new(SqliteUserStore::new("usercache.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let users = CachedUserRepository::new(store, cache, Duration::from_secs(300));
//! ```

mod user;

pub use user::CachedUserRepository;
