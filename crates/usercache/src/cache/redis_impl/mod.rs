//! Redis cache backend implementation.
//!
//! Provides a shared cache using Redis for multi-instance deployments.
//! Supports connection pooling and native per-key expiration.

mod cache;
mod error;

pub use cache::RedisCache;
