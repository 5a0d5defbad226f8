//! Cached user repository decorator.
//!
//! Wraps a `UserStore` implementation with cache-aside pattern.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use usercache_core::cache::{deserialize_user, serialize_user, user_key, Cache, CacheError};
use usercache_core::context::Context;
use usercache_core::repository::{RepositoryError, Result, UserRepository};
use usercache_core::storage::UserStore;
use usercache_core::user::{User, UserFields, UserId};

/// Cached user repository decorator.
///
/// Implements the cache-aside pattern:
/// - **Reads**: Check cache first, on miss fetch from the store and populate
///   the cache with a fixed TTL. Missing users are never cached.
/// - **Writes**: Persist to the store, then delete the cached entry so the
///   next read repopulates it.
///
/// The store is authoritative. Every cache failure is logged and swallowed:
/// a failed lookup degrades to a store read, a failed population or
/// invalidation leaves the call successful.
///
/// A read that misses, loads a record, and populates the cache after a
/// concurrent update has already invalidated the key can leave a stale entry
/// behind. Such an entry lives at most one TTL window.
///
/// # Type Parameters
///
/// * `S` - The underlying durable store
/// * `C` - The cache implementation
pub struct CachedUserRepository<S, C>
where
    S: UserStore,
    C: Cache,
{
    store: Arc<S>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<S, C> CachedUserRepository<S, C>
where
    S: UserStore,
    C: Cache,
{
    /// Creates a new cached user repository.
    ///
    /// # Arguments
    ///
    /// * `store` - The durable store holding the authoritative records
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live for cached users
    pub fn new(store: Arc<S>, cache: Arc<C>, ttl: Duration) -> Self {
        Self { store, cache, ttl }
    }

    /// TTL applied to every populated entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Looks the user up in the cache. Anything other than a well-formed
    /// entry for `id` is a miss; only context errors abort the read.
    async fn lookup(&self, ctx: &Context, id: UserId, key: &str) -> Result<Option<User>> {
        let bytes = match self.cache.get(ctx, key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Ok(None),
            Err(CacheError::Canceled) => return Err(RepositoryError::Canceled),
            Err(CacheError::DeadlineExceeded) => return Err(RepositoryError::DeadlineExceeded),
            Err(err) => {
                tracing::warn!(user_id = %id, error = %err, "Cache lookup failed");
                return Ok(None);
            }
        };

        match deserialize_user(&bytes) {
            Ok(user) if user.id == id => Ok(Some(user)),
            Ok(user) => {
                tracing::warn!(user_id = %id, cached_id = %user.id, "Cached user has mismatched id");
                Ok(None)
            }
            Err(err) => {
                tracing::warn!(user_id = %id, error = %err, "Cache user deserialization failed");
                Ok(None)
            }
        }
    }

    async fn populate(&self, ctx: &Context, key: &str, user: &User) {
        let bytes = match serialize_user(user) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(user_id = %user.id, error = %err, "Failed to serialize user");
                return;
            }
        };

        if let Err(err) = self.cache.set_with_ttl(ctx, key, &bytes, self.ttl).await {
            tracing::warn!(user_id = %user.id, error = %err, "Failed to cache user");
        }
    }

    async fn invalidate(&self, ctx: &Context, id: UserId) {
        if let Err(err) = self.cache.delete(ctx, &user_key(id)).await {
            tracing::warn!(user_id = %id, error = %err, "Failed to invalidate user cache");
        }
    }
}

#[async_trait]
impl<S, C> UserRepository for CachedUserRepository<S, C>
where
    S: UserStore + 'static,
    C: Cache + 'static,
{
    async fn get_user(&self, ctx: &Context, id: UserId) -> Result<User> {
        let cache_key = user_key(id);

        // Check cache first
        if let Some(user) = self.lookup(ctx, id, &cache_key).await? {
            tracing::trace!(user_id = %id, "Cache hit for user");
            return Ok(user);
        }

        // Cache miss - fetch from the store
        tracing::trace!(user_id = %id, "Cache miss for user");
        let user = self
            .store
            .find_by_id(ctx, id)
            .await?
            .ok_or_else(|| RepositoryError::user_not_found(id))?;

        self.populate(ctx, &cache_key, &user).await;

        Ok(user)
    }

    async fn create_user(&self, ctx: &Context, fields: &UserFields) -> Result<User> {
        let id = self.store.insert(ctx, fields).await?;

        tracing::debug!(user_id = %id, email = %fields.email, "User created");
        Ok(User::from_fields(id, fields.clone()))
    }

    async fn update_user(&self, ctx: &Context, id: UserId, fields: &UserFields) -> Result<()> {
        // 1. Persist to storage
        if !self.store.update_by_id(ctx, id, fields).await? {
            return Err(RepositoryError::user_not_found(id));
        }

        // 2. Invalidate cache (will be repopulated on next read)
        self.invalidate(ctx, id).await;

        tracing::debug!(user_id = %id, "User updated");
        Ok(())
    }

    async fn delete_user(&self, ctx: &Context, id: UserId) -> Result<()> {
        // 1. Persist deletion to storage
        if !self.store.delete_by_id(ctx, id).await? {
            return Err(RepositoryError::user_not_found(id));
        }

        // 2. Invalidate cache
        self.invalidate(ctx, id).await;

        tracing::debug!(user_id = %id, "User deleted");
        Ok(())
    }
}
