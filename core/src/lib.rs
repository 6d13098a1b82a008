//! # TokenKeeper Core
//!
//! Core session logic for the TokenKeeper server: domain entities, the
//! token issuer and verifier, repository and revocation store interfaces,
//! the session manager and the error types shared by all of them.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
