//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{AuthError, StoreError, TokenError};

use thiserror::Error;

/// Core domain errors
///
/// Every component returns one of the typed failures below; the session
/// layer passes them upward without retrying or swallowing them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DomainError {
    /// Whether this error means the revocation store could not be reached
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, DomainError::Store(StoreError::Unavailable { .. }))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
