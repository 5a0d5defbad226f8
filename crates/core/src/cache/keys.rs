use std::fmt::Display;

use crate::user::UserId;

/// Entity prefix for user cache keys.
pub const USER_KEY_PREFIX: &str = "user";

/// Returns the cache key for an entity: `"<prefix>:<id>"`.
pub fn entity_key(prefix: &str, id: impl Display) -> String {
    format!("{}:{}", prefix, id)
}

/// Returns the cache key for a single user.
///
/// # Examples
///
/// ```
/// use usercache_core::cache::user_key;
/// use usercache_core::user::UserId;
///
/// assert_eq!(user_key(UserId(42)), "user:42");
/// ```
pub fn user_key(user_id: UserId) -> String {
    entity_key(USER_KEY_PREFIX, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key() {
        assert_eq!(user_key(UserId(1)), "user:1");
        assert_eq!(user_key(UserId(1234567890)), "user:1234567890");
    }

    #[test]
    fn test_entity_key() {
        assert_eq!(entity_key("order", 7), "order:7");
    }

    #[test]
    fn test_distinct_ids_give_distinct_keys() {
        assert_ne!(user_key(UserId(1)), user_key(UserId(11)));
        assert_ne!(user_key(UserId(12)), user_key(UserId(121)));
    }
}
