//! Shared configuration and common types for the TokenKeeper server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types (signing secrets, token lifetimes, Redis, HTTP server)
//! - Error response structures and error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    JwtConfig, CacheConfig, ServerConfig, LoggingConfig, SessionConfig,
};
pub use errors::{ErrorResponse, error_codes};
