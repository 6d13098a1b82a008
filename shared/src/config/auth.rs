//! Authentication configuration: signing secrets, token lifetimes and session policy

use serde::{Deserialize, Serialize};

/// Placeholder secrets used when nothing is configured (development only)
pub const DEFAULT_ACCESS_SECRET: &str = "development-access-secret-change-me";
pub const DEFAULT_REFRESH_SECRET: &str = "development-refresh-secret-change-me";

/// JWT signing configuration
///
/// Access and refresh credentials are signed in separate domains, so each
/// carries its own secret.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret for signing access tokens
    pub access_secret: String,

    /// Secret for signing refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,

    /// Algorithm used when signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from(DEFAULT_ACCESS_SECRET),
            refresh_secret: String::from(DEFAULT_REFRESH_SECRET),
            access_token_expiry: 60,              // 1 minute
            refresh_token_expiry: 60 * 86400,     // 60 days
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a configuration with explicit secrets and default lifetimes
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in seconds
    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry = seconds;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Check if either secret is still the development placeholder
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret == DEFAULT_ACCESS_SECRET || self.refresh_secret == DEFAULT_REFRESH_SECRET
    }

    /// Load from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_secret: std::env::var("ACCESS_SECRET").unwrap_or(defaults.access_secret),
            refresh_secret: std::env::var("REFRESH_SECRET").unwrap_or(defaults.refresh_secret),
            access_token_expiry: std::env::var("ACCESS_TOKEN_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry),
            refresh_token_expiry: std::env::var("REFRESH_TOKEN_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry),
            algorithm: defaults.algorithm,
        }
    }
}

/// Session policy configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Require a presented refresh token to match the one currently stored
    /// for the user (single-use rotation). Off by default.
    #[serde(default)]
    pub enforce_rotation: bool,
}

impl SessionConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        let enforce_rotation = std::env::var("ENFORCE_REFRESH_ROTATION")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Self { enforce_rotation }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Base URL of the external user directory; in-memory users when unset
    #[serde(default)]
    pub user_directory_url: Option<String>,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            session: SessionConfig::from_env(),
            user_directory_url: std::env::var("USER_DIRECTORY_URL").ok().filter(|v| !v.is_empty()),
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}
