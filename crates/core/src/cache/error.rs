use thiserror::Error;

use crate::context::ContextError;

/// Errors that can occur during cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Cache operation canceled")]
    Canceled,
    #[error("Cache operation deadline exceeded")]
    DeadlineExceeded,
}

impl From<ContextError> for CacheError {
    fn from(err: ContextError) -> Self {
        match err {
            ContextError::Canceled => CacheError::Canceled,
            ContextError::DeadlineExceeded => CacheError::DeadlineExceeded,
        }
    }
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display() {
        let error = CacheError::ConnectionFailed("timeout".to_string());
        assert_eq!(error.to_string(), "Cache connection failed: timeout");
    }

    #[test]
    fn test_operation_failed_display() {
        let error = CacheError::OperationFailed("WRONGTYPE".to_string());
        assert_eq!(error.to_string(), "Cache operation failed: WRONGTYPE");
    }

    #[test]
    fn test_serialization_display() {
        let error = CacheError::Serialization("invalid JSON".to_string());
        assert_eq!(error.to_string(), "Serialization error: invalid JSON");
    }

    #[test]
    fn test_context_error_conversion() {
        assert_eq!(
            CacheError::from(ContextError::Canceled),
            CacheError::Canceled
        );
        assert_eq!(
            CacheError::from(ContextError::DeadlineExceeded),
            CacheError::DeadlineExceeded
        );
    }
}
