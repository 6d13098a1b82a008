//! Revocation store trait: the current valid refresh token per user.
//!
//! The store is the only shared mutable state in the session layer. Each
//! operation is a single atomic remote call; there are no multi-key
//! transactions, so implementations need no in-process locking beyond what
//! their client requires.

use async_trait::async_trait;

use crate::errors::StoreError;

/// Key-value contract for refresh token revocation entries
///
/// Keys are user ids, values are refresh token strings. At most one entry
/// exists per user; `put` overwrites.
///
/// # Example
/// ```no_run
/// # use tk_core::repositories::RevocationStore;
/// # use tk_core::errors::StoreError;
/// # async fn example(store: &impl RevocationStore) -> Result<(), StoreError> {
/// store.put("1", "refresh.token.value").await?;
///
/// match store.get("1").await {
///     Ok(token) => println!("current refresh token: {}", token),
///     Err(StoreError::NotFound) => println!("user has no active session"),
///     Err(e) => return Err(e),
/// }
///
/// store.delete("1").await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Record `refresh_token` as the current entry for `user_id`
    ///
    /// # Returns
    /// * `Ok(())` - Entry written (any previous entry is replaced)
    /// * `Err(StoreError::Unavailable)` - Store unreachable
    async fn put(&self, user_id: &str, refresh_token: &str) -> Result<(), StoreError>;

    /// Fetch the current entry for `user_id`
    ///
    /// # Returns
    /// * `Ok(String)` - The stored refresh token
    /// * `Err(StoreError::NotFound)` - No entry for this user
    /// * `Err(StoreError::Unavailable)` - Store unreachable
    async fn get(&self, user_id: &str) -> Result<String, StoreError>;

    /// Remove the entry for `user_id`
    ///
    /// Succeeds whether or not an entry existed.
    async fn delete(&self, user_id: &str) -> Result<(), StoreError>;

    /// Check connectivity to the backing store
    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
