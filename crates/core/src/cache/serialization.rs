//! Pure functions for serializing/deserializing domain types to/from cache bytes.
//!
//! These functions use JSON serialization for cache storage, providing human-readable
//! cache values that are easy to debug and inspect. Failures are reported as
//! `CacheError::Serialization`.

use crate::user::User;

use super::{CacheError, Result};

/// Serializes a user to JSON bytes.
pub fn serialize_user(user: &User) -> Result<Vec<u8>> {
    serde_json::to_vec(user)
        .map_err(|e| CacheError::Serialization(format!("Failed to serialize user: {e}")))
}

/// Deserializes JSON bytes to a user.
pub fn deserialize_user(bytes: &[u8]) -> Result<User> {
    serde_json::from_slice(bytes)
        .map_err(|e| CacheError::Serialization(format!("Failed to deserialize user: {e}")))
}
