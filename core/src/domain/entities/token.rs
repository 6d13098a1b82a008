//! Token entities for JWT-based session credentials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access token lifetime (60 seconds)
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 60;

/// Refresh token lifetime (60 days)
pub const REFRESH_TOKEN_TTL_SECONDS: i64 = 60 * 24 * 60 * 60;

/// Claims embedded in every issued credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user id
    pub user_id: String,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `user_id` expiring at `expires_at`
    pub fn new(user_id: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            exp: expires_at.timestamp(),
        }
    }

    /// Whether these claims were issued for `user_id`
    pub fn belongs_to(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Signing domain a credential belongs to
///
/// Each domain is signed with its own secret, so a credential is only
/// meaningful inside the domain that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningDomain {
    /// Short-lived credential authorizing requests
    Access,
    /// Long-lived credential exchanged for a new pair
    Refresh,
}

impl std::fmt::Display for SigningDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SigningDomain::Access => write!(f, "access"),
            SigningDomain::Refresh => write!(f, "refresh"),
        }
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token
    pub refresh_token: String,

    /// Access token expiry (seconds since epoch)
    pub access_expires_at: i64,

    /// Refresh token expiry (seconds since epoch)
    pub refresh_expires_at: i64,
}
