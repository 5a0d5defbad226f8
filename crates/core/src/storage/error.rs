use thiserror::Error;

use crate::context::ContextError;

/// Errors that can occur during durable store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Store operation canceled")]
    Canceled,
    #[error("Store operation deadline exceeded")]
    DeadlineExceeded,
}

impl From<ContextError> for StoreError {
    fn from(err: ContextError) -> Self {
        match err {
            ContextError::Canceled => StoreError::Canceled,
            ContextError::DeadlineExceeded => StoreError::DeadlineExceeded,
        }
    }
}

/// Result type for durable store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_connection_failed_display() {
        let error = StoreError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_store_error_query_failed_display() {
        let error = StoreError::QueryFailed("no such table: users".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: users");
    }

    #[test]
    fn test_store_error_invalid_data_display() {
        let error = StoreError::InvalidData("id out of range".to_string());
        assert_eq!(error.to_string(), "Invalid data: id out of range");
    }

    #[test]
    fn test_context_error_conversion() {
        assert_eq!(
            StoreError::from(ContextError::Canceled),
            StoreError::Canceled
        );
        assert_eq!(
            StoreError::from(ContextError::DeadlineExceeded),
            StoreError::DeadlineExceeded
        );
    }
}
