use thiserror::Error;

use crate::storage::StoreError;

/// Errors surfaced by a user repository.
///
/// Cache failures never appear here: the cache is best-effort and its
/// errors are logged by the repository instead of returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),
    #[error("Operation canceled")]
    Canceled,
    #[error("Deadline exceeded")]
    DeadlineExceeded,
}

impl RepositoryError {
    /// Shorthand for a missing user.
    pub fn user_not_found(id: impl ToString) -> Self {
        RepositoryError::NotFound {
            entity_type: "User",
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Canceled => RepositoryError::Canceled,
            StoreError::DeadlineExceeded => RepositoryError::DeadlineExceeded,
            other => RepositoryError::StoreUnavailable(other),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = RepositoryError::user_not_found(42);
        assert_eq!(error.to_string(), "User not found: 42");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_store_unavailable_display() {
        let error = RepositoryError::StoreUnavailable(StoreError::ConnectionFailed(
            "refused".to_string(),
        ));
        assert_eq!(
            error.to_string(),
            "Store unavailable: Connection failed: refused"
        );
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_store_error_conversion() {
        assert_eq!(
            RepositoryError::from(StoreError::Canceled),
            RepositoryError::Canceled
        );
        assert_eq!(
            RepositoryError::from(StoreError::DeadlineExceeded),
            RepositoryError::DeadlineExceeded
        );
        assert_eq!(
            RepositoryError::from(StoreError::QueryFailed("boom".to_string())),
            RepositoryError::StoreUnavailable(StoreError::QueryFailed("boom".to_string()))
        );
    }
}
