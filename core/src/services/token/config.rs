//! Configuration for token issuing and verification

use jsonwebtoken::Algorithm;
use tk_shared::config::JwtConfig;

use crate::domain::entities::token::{
    SigningDomain, ACCESS_TOKEN_TTL_SECONDS, REFRESH_TOKEN_TTL_SECONDS,
};
use crate::errors::DomainError;

use super::verifier::ACCEPTED_ALGORITHMS;

/// Configuration for the token issuer and verifier
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for the access signing domain
    pub access_secret: String,
    /// Secret for the refresh signing domain
    pub refresh_secret: String,
    /// Signing algorithm (HMAC family only)
    pub algorithm: Algorithm,
    /// Access token lifetime in seconds
    pub access_token_ttl_seconds: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_ttl_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: "development-access-secret-change-me".to_string(),
            refresh_secret: "development-refresh-secret-change-me".to_string(),
            algorithm: Algorithm::HS256,
            access_token_ttl_seconds: ACCESS_TOKEN_TTL_SECONDS,
            refresh_token_ttl_seconds: REFRESH_TOKEN_TTL_SECONDS,
        }
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with explicit secrets and default lifetimes
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Builds the configuration from the shared JWT settings
    ///
    /// # Returns
    ///
    /// * `Ok(TokenServiceConfig)` - Validated configuration
    /// * `Err(DomainError::Validation)` - Non-HMAC algorithm, empty secret or bad lifetimes
    pub fn from_jwt_config(jwt: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = ACCEPTED_ALGORITHMS
            .iter()
            .find(|(name, _)| *name == jwt.algorithm)
            .map(|(_, alg)| *alg)
            .ok_or_else(|| DomainError::Validation {
                message: format!("unsupported signing algorithm: {}", jwt.algorithm),
            })?;

        let config = Self {
            access_secret: jwt.access_secret.clone(),
            refresh_secret: jwt.refresh_secret.clone(),
            algorithm,
            access_token_ttl_seconds: jwt.access_token_expiry,
            refresh_token_ttl_seconds: jwt.refresh_token_expiry,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks both secrets are non-empty and the lifetimes are consistent
    pub fn validate(&self) -> Result<(), DomainError> {
        for domain in [SigningDomain::Access, SigningDomain::Refresh] {
            if self.secret_for(domain).is_empty() {
                return Err(DomainError::Validation {
                    message: format!("{} token secret must not be empty", domain),
                });
            }
        }
        if self.access_token_ttl_seconds <= 0 || self.refresh_token_ttl_seconds <= 0 {
            return Err(DomainError::Validation {
                message: "token lifetimes must be positive".to_string(),
            });
        }
        if self.access_token_ttl_seconds >= self.refresh_token_ttl_seconds {
            return Err(DomainError::Validation {
                message: "access token lifetime must be shorter than refresh token lifetime"
                    .to_string(),
            });
        }
        Ok(())
    }

    /// Secret bytes for a signing domain
    pub fn secret_for(&self, domain: SigningDomain) -> &[u8] {
        match domain {
            SigningDomain::Access => self.access_secret.as_bytes(),
            SigningDomain::Refresh => self.refresh_secret.as_bytes(),
        }
    }

    /// Lifetime in seconds for a signing domain
    pub fn ttl_for(&self, domain: SigningDomain) -> i64 {
        match domain {
            SigningDomain::Access => self.access_token_ttl_seconds,
            SigningDomain::Refresh => self.refresh_token_ttl_seconds,
        }
    }
}
