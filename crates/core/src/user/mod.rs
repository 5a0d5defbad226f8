mod error;
mod operations;
mod types;

pub use error::UserError;
pub use operations::{validate_user_fields, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};
pub use types::{User, UserFields, UserId};
