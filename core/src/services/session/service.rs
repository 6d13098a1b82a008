//! Session manager implementation

use std::sync::Arc;

use tracing::{debug, info, warn};

use tk_shared::config::SessionConfig;

use crate::domain::entities::token::{Claims, SigningDomain, TokenPair};
use crate::errors::{AuthError, DomainError, DomainResult, StoreError};
use crate::repositories::{RevocationStore, UserRepository};
use crate::services::token::{
    extract_bearer, TokenIssuer, TokenServiceConfig, TokenVerifier,
};

/// Session manager for the credential lifecycle of every user
///
/// Per user the lifecycle is `Anonymous -> Authenticated -> LoggedOut`, and
/// a logged out user may log in again. The revocation store holds at most
/// one refresh token per user.
///
/// Logout only removes the stored refresh token. Access tokens already
/// handed out stay valid until their own expiry, which the short access
/// lifetime bounds.
pub struct SessionManager<U, S>
where
    U: UserRepository,
    S: RevocationStore,
{
    /// Source of users for login
    user_repository: Arc<U>,
    /// Current refresh token per user
    store: Arc<S>,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
    config: SessionConfig,
}

impl<U, S> SessionManager<U, S>
where
    U: UserRepository,
    S: RevocationStore,
{
    /// Create a new session manager
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository used to look up users at login
    /// * `store` - Revocation store shared by every flow
    /// * `token_config` - Secrets and lifetimes for both signing domains
    /// * `config` - Session policy
    ///
    /// # Returns
    ///
    /// The manager, or a validation error for an empty secret or inconsistent lifetimes
    pub fn new(
        user_repository: Arc<U>,
        store: Arc<S>,
        token_config: TokenServiceConfig,
        config: SessionConfig,
    ) -> DomainResult<Self> {
        let verifier = TokenVerifier::new(&token_config)?;
        let issuer = TokenIssuer::new(token_config)?;

        Ok(Self {
            user_repository,
            store,
            issuer,
            verifier,
            config,
        })
    }

    /// Token issuer used by this manager
    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    /// Session policy
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Log a user in with username and password
    ///
    /// The refresh token of the new pair replaces any entry already stored
    /// for the user.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Credentials for the user
    /// * `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password; nothing is stored
    /// * `Err(TokenError::SigningFailure)` - A credential could not be signed
    /// * `Err(StoreError::Unavailable)` - The refresh token could not be recorded
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<TokenPair> {
        let user = match self.user_repository.find_by_username(username).await? {
            Some(user) if user.password_matches(password) => user,
            _ => {
                info!("Login rejected: invalid credentials");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let pair = self.issuer.create_token_pair(&user.id)?;

        if let Err(e) = self.store.put(&user.id, &pair.refresh_token).await {
            warn!("Login for user {} failed to record refresh token: {}", user.id, e);
            return Err(e.into());
        }

        info!("User {} logged in", user.id);
        Ok(pair)
    }

    /// Authorize a request for `user_id` presenting an access token
    ///
    /// Purely cryptographic; the revocation store is not consulted. Every
    /// failure is reported as `AuthError::Unauthorized`.
    pub async fn authorize(&self, user_id: &str, access_token: &str) -> DomainResult<Claims> {
        let claims = self
            .verifier
            .verify(access_token, SigningDomain::Access)
            .map_err(|e| {
                debug!("Authorization for user {} rejected: {}", user_id, e);
                AuthError::Unauthorized
            })?;

        if !claims.belongs_to(user_id) {
            debug!(
                "Authorization for user {} rejected: {}",
                user_id,
                AuthError::ClaimsUserMismatch
            );
            return Err(AuthError::Unauthorized.into());
        }

        Ok(claims)
    }

    /// Authorize a request from the raw `Authorization` header value
    pub async fn authorize_bearer(&self, user_id: &str, header: &str) -> DomainResult<Claims> {
        let token = extract_bearer(header).map_err(|e| {
            debug!("Authorization for user {} rejected: {}", user_id, e);
            AuthError::Unauthorized
        })?;
        self.authorize(user_id, token).await
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// When rotation is enforced the presented token must also equal the
    /// one currently stored for the user, so each refresh token is usable
    /// once.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New credentials; the stored entry now holds the new refresh token
    /// * `Err(AuthError::Unauthorized)` - Invalid, expired, foreign or superseded refresh token
    /// * `Err(StoreError::Unavailable)` - The store could not be read or written
    pub async fn refresh(&self, user_id: &str, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self
            .verifier
            .verify(refresh_token, SigningDomain::Refresh)
            .map_err(|e| {
                info!("Refresh for user {} rejected: {}", user_id, e);
                AuthError::Unauthorized
            })?;

        if !claims.belongs_to(user_id) {
            info!(
                "Refresh for user {} rejected: {}",
                user_id,
                AuthError::ClaimsUserMismatch
            );
            return Err(AuthError::Unauthorized.into());
        }

        if self.config.enforce_rotation {
            self.check_current(user_id, refresh_token).await?;
        }

        let pair = self.issuer.create_token_pair(user_id)?;
        self.store.put(user_id, &pair.refresh_token).await.map_err(|e| {
            warn!("Refresh for user {} failed to record refresh token: {}", user_id, e);
            DomainError::from(e)
        })?;

        info!("Refreshed tokens for user {}", user_id);
        Ok(pair)
    }

    /// Requires `refresh_token` to be the stored entry for `user_id`
    async fn check_current(&self, user_id: &str, refresh_token: &str) -> DomainResult<()> {
        match self.store.get(user_id).await {
            Ok(current) if current == refresh_token => Ok(()),
            Ok(_) => {
                info!("Refresh for user {} rejected: superseded token", user_id);
                Err(AuthError::Unauthorized.into())
            }
            Err(StoreError::NotFound) => {
                info!("Refresh for user {} rejected: no active session", user_id);
                Err(AuthError::Unauthorized.into())
            }
            Err(e) => {
                warn!("Refresh for user {} could not read store: {}", user_id, e);
                Err(e.into())
            }
        }
    }

    /// Log a user out by removing their refresh token
    ///
    /// Succeeds whether or not the user had an active session.
    pub async fn logout(&self, user_id: &str) -> DomainResult<()> {
        self.store.delete(user_id).await.map_err(|e| {
            warn!("Logout for user {} failed: {}", user_id, e);
            DomainError::from(e)
        })?;

        info!("User {} logged out", user_id);
        Ok(())
    }

    /// Check connectivity to the revocation store
    pub async fn store_health(&self) -> bool {
        match self.store.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                warn!("Revocation store health check failed: {}", e);
                false
            }
        }
    }
}
