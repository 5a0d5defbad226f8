//! Redis cache implementation.
//!
//! Each write is a single `PSETEX`, so a value and its expiration land
//! atomically and Redis evicts the key on its own once the TTL elapses.
//! Every command is raced against the caller's [`Context`].

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use usercache_core::cache::{Cache, Result};
use usercache_core::context::Context;

use super::error::map_redis_error;

/// Redis cache backend using connection manager for pooling.
#[derive(Clone)]
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    /// Creates a new Redis cache connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

/// Converts a TTL to whole milliseconds, never below 1.
fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

/// Interprets a `PTTL` reply. Negative replies mean the key is missing
/// (-2) or has no expiration (-1); neither has a remaining TTL.
fn remaining_from_pttl(reply: i64) -> Option<Duration> {
    u64::try_from(reply).ok().map(Duration::from_millis)
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, ctx: &Context, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let result: Option<Vec<u8>> = ctx.run(conn.get(key)).await?.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set_with_ttl(
        &self,
        ctx: &Context,
        key: &str,
        value: &[u8],
        ttl: Duration,
    ) -> Result<()> {
        let mut conn = self.conn.clone();
        ctx.run(conn.pset_ex::<_, _, ()>(key, value, ttl_millis(ttl)))
            .await?
            .map_err(map_redis_error)
    }

    async fn delete(&self, ctx: &Context, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        ctx.run(conn.del::<_, ()>(key))
            .await?
            .map_err(map_redis_error)
    }

    async fn exists(&self, ctx: &Context, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        ctx.run(conn.exists::<_, bool>(key))
            .await?
            .map_err(map_redis_error)
    }

    async fn ttl(&self, ctx: &Context, key: &str) -> Result<Option<Duration>> {
        let mut conn = self.conn.clone();
        let reply: i64 = ctx
            .run(conn.pttl(key))
            .await?
            .map_err(map_redis_error)?;
        Ok(remaining_from_pttl(reply))
    }
}
