//! Redis-backed revocation store
//!
//! Keys are `<prefix>:<user_id>` (or the bare user id when no prefix is
//! configured) and values are the user's current refresh token.

use async_trait::async_trait;
use tracing::debug;

use tk_core::errors::StoreError;
use tk_core::repositories::RevocationStore;

use crate::cache::{CacheConfig, RedisClient};
use crate::InfrastructureError;

/// Revocation store on top of a shared [`RedisClient`]
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
}

impl RedisRevocationStore {
    /// Wrap an existing client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Create a store with its own client; does not connect
    pub fn from_config(config: CacheConfig) -> Result<Self, InfrastructureError> {
        Ok(Self::new(RedisClient::new(config)?))
    }

    /// Key holding the entry for `user_id`
    pub fn key_for(&self, user_id: &str) -> String {
        self.client.config().make_key(user_id)
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn put(&self, user_id: &str, refresh_token: &str) -> Result<(), StoreError> {
        let key = self.key_for(user_id);
        match self.client.config().revocation_ttl {
            Some(ttl) => self.client.set_with_expiry(&key, refresh_token, ttl).await?,
            None => self.client.set(&key, refresh_token).await?,
        }
        debug!("Recorded refresh token for user {}", user_id);
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<String, StoreError> {
        self.client
            .get(&self.key_for(user_id))
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, user_id: &str) -> Result<(), StoreError> {
        let deleted = self.client.delete(&self.key_for(user_id)).await?;
        debug!("Removed refresh token for user {} (existed: {})", user_id, deleted);
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(self.client.health_check().await?)
    }
}
