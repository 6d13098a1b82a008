//! User lookup against an external HTTP user directory
//!
//! The directory answers `GET {base_url}/users/{username}` with a JSON
//! user record (`id`, `username`, `password`) or 404 when unknown.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, error};

use tk_core::domain::entities::user::User;
use tk_core::errors::DomainError;
use tk_core::repositories::UserRepository;

use crate::InfrastructureError;

/// User repository querying a remote directory over HTTP
#[derive(Clone)]
pub struct HttpUserRepository {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpUserRepository {
    /// Create a repository for the directory at `base_url`
    ///
    /// # Arguments
    /// * `base_url` - Directory root, with or without trailing slash
    /// * `request_timeout` - Upper bound for each lookup
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, InfrastructureError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            InfrastructureError::Config(format!("Invalid user directory URL: {}", e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(InfrastructureError::Config(format!(
                "Invalid user directory URL: {}",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// URL of the directory entry for `username`, with the name percent-encoded
    pub fn user_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(username);
        }
        url
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let response = self
            .client
            .get(self.user_url(username))
            .send()
            .await
            .map_err(|e| {
                error!("User directory request failed: {}", e);
                InfrastructureError::Http(e)
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!("User directory has no entry for the requested name");
                Ok(None)
            }
            status if status.is_success() => {
                let user = response.json::<User>().await.map_err(|e| {
                    error!("User directory returned an unreadable record: {}", e);
                    InfrastructureError::Http(e)
                })?;
                Ok(Some(user))
            }
            status => {
                error!("User directory answered with status {}", status);
                Err(InfrastructureError::UnexpectedResponse(format!(
                    "user directory answered with status {}",
                    status
                ))
                .into())
            }
        }
    }
}
