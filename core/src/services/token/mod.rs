//! Token module for JWT credential management
//!
//! This module handles the stateless side of the token lifecycle:
//! - Issuing access/refresh credential pairs, each in its own signing domain
//! - Verifying credentials: structure, algorithm allow-list, signature, expiry
//! - Extracting bearer credentials from `Authorization` headers
//!
//! Persistence of refresh credentials is the session layer's job.

mod config;
mod issuer;
mod verifier;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use issuer::TokenIssuer;
pub use verifier::{extract_bearer, verify_token, TokenVerifier, ACCEPTED_ALGORITHMS};
