//! # Store Errors
//!
//! Failures a person store can report back to the HTTP layer.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Person store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The identifier does not parse as a store key
    #[error("Cast to id failed for value \"{0}\"")]
    Cast(String),

    /// A field failed the store's own validation
    #[error("{0}")]
    Validation(String),

    /// Another person already holds this name
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    /// Anything else the backend could not do
    #[error("Store backend error: {0}")]
    Backend(String),
}
