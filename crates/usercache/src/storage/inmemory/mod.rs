//! In-memory durable store.
//!
//! Keeps users in a `HashMap` wrapped in `Arc<RwLock<_>>`. Useful for
//! tests, demos and development where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use usercache::storage::inmemory::InMemoryUserStore;
//!
//! let store = InMemoryUserStore::new();
//! // Inject `Arc::new(store)` into a repository...
//! ```

mod repository;

pub use repository::InMemoryUserStore;
