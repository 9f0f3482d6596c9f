//! Error taxonomy for catalog operations.
//!
//! Operating on an id that does not exist is not an error anywhere in this
//! crate: those operations return `Ok(false)` or `None` and let the caller
//! decide the user-facing message.

use thiserror::Error;

/// Rejected input to [`crate::catalog::Catalog::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("author must not be empty")]
    EmptyAuthor,

    #[error("year must be a positive integer, got {0}")]
    InvalidYear(i32),
}

/// Errors that can occur in the catalog store
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
