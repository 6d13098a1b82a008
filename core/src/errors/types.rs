//! Typed failures for authentication, token handling and the revocation store

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Username unknown or password mismatch
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Credential was issued for a different user
    #[error("Token claims do not match user")]
    ClaimsUserMismatch,

    /// Any authorization or refresh failure, collapsed for the caller
    #[error("Unauthorized")]
    Unauthorized,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Signing algorithm not accepted: {algorithm}")]
    AlgorithmMismatch { algorithm: String },

    #[error("Invalid signature")]
    SignatureMismatch,

    #[error("Token expired")]
    Expired,

    #[error("Token signing failed: {reason}")]
    SigningFailure { reason: String },

    #[error("Missing bearer token")]
    MissingToken,
}

/// Revocation store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No entry for the requested user id
    #[error("Entry not found")]
    NotFound,

    /// Store could not be reached or did not answer in time
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    /// Convenience constructor for `Unavailable`
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable { message: message.into() }
    }
}
