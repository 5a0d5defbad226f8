use std::{env, str::FromStr, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    /// Note: Only used by the `memory` cache backend.
    pub cache_max_entries: usize,
    /// Per-command deadline in milliseconds (default: 5,000)
    pub operation_timeout_ms: u64,
    /// Path to SQLite database file (default: "usercache.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `OPERATION_TIMEOUT_MS` - Per-command deadline (default: 5,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "usercache.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: parse_or(env::var("CACHE_TTL_SECONDS").ok(), 300),
            cache_max_entries: parse_or(env::var("CACHE_MAX_ENTRIES").ok(), 10_000),
            operation_timeout_ms: parse_or(env::var("OPERATION_TIMEOUT_MS").ok(), 5_000),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "usercache.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the per-command deadline as a Duration.
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
