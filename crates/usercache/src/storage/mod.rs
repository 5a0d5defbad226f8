//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `UserStore` trait
//! defined in `usercache_core::storage`, plus the cache-aside repository that
//! sits in front of them. The store is selected at compile time via feature
//! flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMap-backed store, nothing is persisted
//! - `sqlite`: SQLite store using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time; `state` rejects other combinations at compile time.
//!
//! # Examples
//!
//! Build with the in-memory store (default):
//! ```bash
//! cargo build -p usercache
//! ```
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p usercache --no-default-features --features sqlite,memory
//! ```

pub mod cached;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use cached::CachedUserRepository;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryUserStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteUserStore;
