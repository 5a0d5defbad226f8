use thiserror::Error;

/// Errors that can occur when validating user fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("User email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("User email too long (max 254 characters)")]
    EmailTooLong,
    #[error("User name cannot be empty")]
    EmptyName,
    #[error("User name too long (max 100 characters)")]
    NameTooLong,
}
