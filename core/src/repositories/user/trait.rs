//! User repository trait defining how the session layer looks up users.
//!
//! The session layer only needs to resolve a login name to a user record.
//! Implementations may keep users in memory or ask an external directory.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for user lookup
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use tk_core::repositories::UserRepository;
/// use tk_core::domain::entities::user::User;
/// use tk_core::errors::DomainError;
///
/// struct DirectoryUserRepository {
///     // client for the directory service
/// }
///
/// #[async_trait]
/// impl UserRepository for DirectoryUserRepository {
///     async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by login name
    ///
    /// # Arguments
    /// * `username` - Exact login name
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that name
    /// * `Err(DomainError)` - The backing directory failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
