//! Business services containing the token lifecycle logic.

pub mod session;
pub mod token;

// Re-export commonly used types
pub use session::SessionManager;
pub use token::{
    extract_bearer, verify_token, TokenIssuer, TokenServiceConfig, TokenVerifier,
    ACCEPTED_ALGORITHMS,
};
