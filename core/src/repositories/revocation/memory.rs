//! In-memory implementation of RevocationStore

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::StoreError;

use super::trait_::RevocationStore;

/// Process-local revocation store
///
/// Suitable for tests and single-instance development setups.
#[derive(Clone, Default)]
pub struct InMemoryRevocationStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryRevocationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with an active entry
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn put(&self, user_id: &str, refresh_token: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(user_id.to_string(), refresh_token.to_string());
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<String, StoreError> {
        let entries = self.entries.read().await;
        entries.get(user_id).cloned().ok_or(StoreError::NotFound)
    }

    async fn delete(&self, user_id: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.remove(user_id);
        Ok(())
    }
}
