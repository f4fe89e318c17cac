//! Error types for store operations

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors signalled by the student store
///
/// All variants are recoverable; adapters translate them into their own
/// user-visible form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Student ID already exists: {0}")]
    DuplicateId(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Student not found: {0}")]
    NotFound(i64),
}

impl StoreError {
    /// Build an `InvalidInput` error
    pub fn invalid(message: impl Into<String>) -> Self {
        StoreError::InvalidInput(message.into())
    }
}
