use std::time::Duration;

use async_trait::async_trait;

use crate::context::Context;

use super::Result;

/// Trait for basic cache operations.
///
/// Implementations must treat every operation as atomic per key. In
/// particular [`Cache::set_with_ttl`] must never leave a value visible
/// without its expiration.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, ctx: &Context, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache that expires after `ttl`.
    async fn set_with_ttl(&self, ctx: &Context, key: &str, value: &[u8], ttl: Duration)
        -> Result<()>;

    /// Deletes a value from the cache by key. Deleting a missing key is not an error.
    async fn delete(&self, ctx: &Context, key: &str) -> Result<()>;

    /// Returns true if a live (unexpired) value exists for the key.
    async fn exists(&self, ctx: &Context, key: &str) -> Result<bool>;

    /// Returns the remaining time to live of a key.
    ///
    /// `None` if the key is absent or has no expiration.
    async fn ttl(&self, ctx: &Context, key: &str) -> Result<Option<Duration>>;
}
