//! User entity as seen by the session layer.

use serde::{Deserialize, Serialize};

/// A user that can log in
///
/// Sourced from a user repository and never mutated by the session layer.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier
    pub id: String,

    /// Login name
    pub username: String,

    /// Opaque credential material
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Compares `candidate` against the stored password in constant time
    pub fn password_matches(&self, candidate: &str) -> bool {
        constant_time_eq::constant_time_eq(self.password.as_bytes(), candidate.as_bytes())
    }
}

// Keeps credential material out of logs.
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
