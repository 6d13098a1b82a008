//! Session route handlers
//!
//! This module contains the credential lifecycle endpoints:
//! - Login with username and password
//! - Token refresh
//! - Logout

pub mod login;
pub mod logout;
pub mod refresh;

use std::sync::Arc;

use tk_core::repositories::{RevocationStore, UserRepository};
use tk_core::services::session::SessionManager;

/// Application state that holds shared services
pub struct AppState<U, S>
where
    U: UserRepository,
    S: RevocationStore,
{
    pub session_manager: Arc<SessionManager<U, S>>,
}

impl<U, S> AppState<U, S>
where
    U: UserRepository,
    S: RevocationStore,
{
    pub fn new(session_manager: Arc<SessionManager<U, S>>) -> Self {
        Self { session_manager }
    }
}
