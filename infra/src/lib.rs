//! # Infrastructure Layer
//!
//! Concrete implementations of the repository and store interfaces defined
//! in `tk_core`.
//!
//! ## Architecture
//!
//! - **Cache**: Redis client and the Redis-backed revocation store
//! - **Repositories**: user lookup against an external HTTP user directory
//!
//! Every failure that reaches a `tk_core` trait boundary is reported as
//! `StoreError::Unavailable`; nothing is retried here.

// Re-export core types for convenience
pub use tk_core::errors::*;

/// Cache module - Redis client and revocation store
pub mod cache;

/// Repositories module - External user directory
pub mod repositories;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote call did not finish within the configured timeout
    #[error("Timed out: {0}")]
    Timeout(String),

    /// External service answered with something other than success or not-found
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for StoreError {
    fn from(error: InfrastructureError) -> Self {
        StoreError::unavailable(error.to_string())
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Store(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infrastructure_error_maps_to_store_unavailable() {
        let error = InfrastructureError::Timeout("GET refresh:1".to_string());
        let store_error: StoreError = error.into();

        assert_eq!(
            store_error,
            StoreError::Unavailable {
                message: "Timed out: GET refresh:1".to_string()
            }
        );
    }

    #[test]
    fn test_config_error_maps_to_domain_store_error() {
        let error: DomainError = InfrastructureError::Config("bad url".to_string()).into();
        assert!(error.is_store_unavailable());
    }
}
