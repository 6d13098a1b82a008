//! Redis cache client implementation
//!
//! This module provides a Redis client for the TokenKeeper infrastructure
//! layer. The connection is opened on first use and then shared; every
//! command is bounded by the configured response timeout and reported
//! immediately on failure.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisResult};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use crate::cache::CacheConfig;
use crate::InfrastructureError;

/// Redis cache client with a lazily created multiplexed connection
///
/// Cloning is cheap; clones share the same connection.
#[derive(Clone)]
pub struct RedisClient {
    /// Parsed client used to open the connection
    client: Client,
    /// Multiplexed connection, created on first command
    connection: Arc<OnceCell<MultiplexedConnection>>,
    /// Configuration used to create this client
    config: CacheConfig,
}

impl RedisClient {
    /// Create a new Redis client without connecting
    ///
    /// Only the URL is validated here, so the service can start while Redis
    /// is down.
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Redis client or a configuration error
    ///
    /// # Example
    /// ```no_run
    /// use tk_infra::cache::{CacheConfig, RedisClient};
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let config = CacheConfig::new("redis://localhost:6379");
    ///     let client = RedisClient::new(config)?;
    ///     client.set("refresh:1", "token").await?;
    ///     Ok(client)
    /// }
    /// ```
    pub fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        info!("Creating Redis client with URL: {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        Ok(Self {
            client,
            connection: Arc::new(OnceCell::new()),
            config,
        })
    }

    /// Configuration this client was created with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Get the shared connection, connecting if needed
    ///
    /// A failed attempt leaves the cell empty so the next command tries again.
    async fn connection(&self) -> Result<MultiplexedConnection, InfrastructureError> {
        let connect_timeout = Duration::from_secs(self.config.connection_timeout);

        let connection = self
            .connection
            .get_or_try_init(|| async {
                debug!("Connecting to Redis at {}", mask_url(&self.config.url));
                match timeout(connect_timeout, self.client.get_multiplexed_async_connection()).await
                {
                    Ok(Ok(connection)) => {
                        info!("Successfully connected to Redis");
                        Ok(connection)
                    }
                    Ok(Err(e)) => {
                        warn!("Failed to connect to Redis: {}", e);
                        Err(InfrastructureError::Cache(e))
                    }
                    Err(_) => {
                        warn!("Connecting to Redis timed out after {:?}", connect_timeout);
                        Err(InfrastructureError::Timeout("connect".to_string()))
                    }
                }
            })
            .await?;

        Ok(connection.clone())
    }

    /// Run one command against the connection within the response timeout
    async fn execute<T, F, Fut>(
        &self,
        command: &str,
        operation: F,
    ) -> Result<T, InfrastructureError>
    where
        F: FnOnce(MultiplexedConnection) -> Fut,
        Fut: Future<Output = RedisResult<T>>,
    {
        let connection = self.connection().await?;
        let response_timeout = Duration::from_secs(self.config.response_timeout);

        match timeout(response_timeout, operation(connection)).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                error!("Redis {} failed: {}", command, e);
                Err(InfrastructureError::Cache(e))
            }
            Err(_) => {
                error!("Redis {} timed out after {:?}", command, response_timeout);
                Err(InfrastructureError::Timeout(command.to_string()))
            }
        }
    }

    /// Set a value without expiry
    ///
    /// # Arguments
    /// * `key` - Cache key
    /// * `value` - Value to store; replaces any existing value
    pub async fn set(&self, key: &str, value: &str) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}'", key);

        self.execute("SET", |mut conn| async move {
            conn.set::<_, _, ()>(key, value).await
        })
        .await
    }

    /// Set a value with expiration time
    ///
    /// # Arguments
    /// * `key` - Cache key
    /// * `value` - Value to store
    /// * `expiry_seconds` - Time to live in seconds
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}' with expiry {}s", key, expiry_seconds);

        self.execute("SETEX", |mut conn| async move {
            conn.set_ex::<_, _, ()>(key, value, expiry_seconds).await
        })
        .await
    }

    /// Get a value from cache
    ///
    /// # Returns
    /// * `Result<Option<String>, InfrastructureError>` - Stored value or None if not found
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting key '{}'", key);

        let value = self
            .execute("GET", |mut conn| async move {
                conn.get::<_, Option<String>>(key).await
            })
            .await?;

        if value.is_none() {
            debug!("Key '{}' not found", key);
        }
        Ok(value)
    }

    /// Delete a key from cache
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if key was deleted, false if not found
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Deleting key '{}'", key);

        let deleted_count = self
            .execute("DEL", |mut conn| async move { conn.del::<_, u32>(key).await })
            .await?;

        Ok(deleted_count > 0)
    }

    /// Check if the Redis connection is healthy
    ///
    /// Performs a PING command to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        debug!("Performing Redis health check");

        let response = self
            .execute("PING", |mut conn| async move {
                redis::cmd("PING").query_async::<_, String>(&mut conn).await
            })
            .await?;

        if response == "PONG" {
            Ok(true)
        } else {
            warn!("Redis health check returned unexpected response: {}", response);
            Ok(false)
        }
    }
}

/// Mask credentials in a Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
