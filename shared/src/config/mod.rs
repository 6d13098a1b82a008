//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Signing secrets, token lifetimes and session policy
//! - `cache` - Redis connection for the revocation store
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration

pub mod auth;
pub mod cache;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, SessionConfig};
pub use cache::CacheConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Revocation store configuration
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(),
            cache: CacheConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Problems that make this configuration unsafe to run with
    ///
    /// Placeholder secrets are only tolerated outside production.
    pub fn security_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.auth.jwt.is_using_default_secret() {
            warnings.push(
                "ACCESS_SECRET/REFRESH_SECRET not set, using development secrets".to_string(),
            );
        }
        if self.auth.jwt.access_secret == self.auth.jwt.refresh_secret {
            warnings.push("access and refresh secrets are identical".to_string());
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_warns_about_secrets() {
        let config = AppConfig::default();
        assert_eq!(config.security_warnings().len(), 1);
    }

    #[test]
    fn test_identical_secrets_warn() {
        let mut config = AppConfig::default();
        config.auth.jwt = JwtConfig::new("same", "same");
        assert_eq!(
            config.security_warnings(),
            vec!["access and refresh secrets are identical".to_string()]
        );
    }
}
