//! Token issuer: creates signed access/refresh credential pairs

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use tracing::{debug, error};

use crate::domain::entities::token::{Claims, SigningDomain, TokenPair};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues credential pairs with independent claims and secrets
#[derive(Clone)]
pub struct TokenIssuer {
    config: TokenServiceConfig,
    access_key: EncodingKey,
    refresh_key: EncodingKey,
}

impl TokenIssuer {
    /// Creates a new issuer
    ///
    /// # Arguments
    ///
    /// * `config` - Secrets, algorithm and lifetimes
    ///
    /// # Returns
    ///
    /// The issuer, or a validation error for an empty secret or inconsistent lifetimes
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let access_key = EncodingKey::from_secret(config.secret_for(SigningDomain::Access));
        let refresh_key = EncodingKey::from_secret(config.secret_for(SigningDomain::Refresh));

        Ok(Self {
            config,
            access_key,
            refresh_key,
        })
    }

    /// Issuer configuration
    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Creates a token pair for `user_id` as of now
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Both credentials signed
    /// * `Err(TokenError::SigningFailure)` - Either credential could not be signed
    pub fn create_token_pair(&self, user_id: &str) -> Result<TokenPair, TokenError> {
        self.create_token_pair_at(user_id, Utc::now())
    }

    /// Creates a token pair for `user_id` with expiries computed from `now`
    pub fn create_token_pair_at(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, TokenError> {
        let access_expires_at = now + Duration::seconds(self.config.access_token_ttl_seconds);
        let refresh_expires_at = now + Duration::seconds(self.config.refresh_token_ttl_seconds);

        let access_token = self.sign(
            SigningDomain::Access,
            &Claims::new(user_id, access_expires_at),
        )?;
        let refresh_token = self.sign(
            SigningDomain::Refresh,
            &Claims::new(user_id, refresh_expires_at),
        )?;

        debug!("Issued token pair for user {}", user_id);

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at: access_expires_at.timestamp(),
            refresh_expires_at: refresh_expires_at.timestamp(),
        })
    }

    /// Signs `claims` in `domain`
    pub fn sign(&self, domain: SigningDomain, claims: &Claims) -> Result<String, TokenError> {
        let key = match domain {
            SigningDomain::Access => &self.access_key,
            SigningDomain::Refresh => &self.refresh_key,
        };

        encode(&Header::new(self.config.algorithm), claims, key).map_err(|e| {
            error!("Failed to sign {} token: {}", domain, e);
            TokenError::SigningFailure {
                reason: e.to_string(),
            }
        })
    }
}
