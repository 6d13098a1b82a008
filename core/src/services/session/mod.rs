//! Session module orchestrating the token lifecycle
//!
//! Combines the token issuer/verifier with a user repository and the
//! revocation store to implement login, authorization, refresh and logout.

mod service;

#[cfg(test)]
mod tests;

pub use service::SessionManager;
