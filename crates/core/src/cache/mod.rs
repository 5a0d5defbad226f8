mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{entity_key, user_key, USER_KEY_PREFIX};
pub use serialization::{deserialize_user, serialize_user};
pub use traits::Cache;
