use thiserror::Error;

/// Why a context stopped accepting work.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("Operation canceled")]
    Canceled,
    #[error("Deadline exceeded")]
    DeadlineExceeded,
}
