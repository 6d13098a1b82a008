//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Redis configuration for the revocation store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// Response timeout in seconds, applied to every store call
    pub response_timeout: u64,

    /// Key prefix for revocation entries; raw user ids when `None`
    #[serde(default = "default_key_prefix")]
    pub key_prefix: Option<String>,

    /// Optional TTL for revocation entries in seconds; entries persist until
    /// deleted or overwritten when `None`
    #[serde(default)]
    pub revocation_ttl: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connection_timeout: 5,
            response_timeout: 5,
            key_prefix: default_key_prefix(),
            revocation_ttl: None,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    ///
    /// `REDIS_URL` takes precedence; a bare `host:port` in `REDIS_DSN` is
    /// accepted as well.
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL")
            .ok()
            .or_else(|| std::env::var("REDIS_DSN").ok().map(|dsn| normalize_redis_url(&dsn)))
            .unwrap_or_else(|| "redis://localhost:6379".to_string());
        let response_timeout = std::env::var("REDIS_RESPONSE_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);
        let key_prefix = match std::env::var("REDIS_KEY_PREFIX") {
            Ok(prefix) if prefix.is_empty() => None,
            Ok(prefix) => Some(prefix),
            Err(_) => default_key_prefix(),
        };
        let revocation_ttl = std::env::var("REVOCATION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|ttl: &u64| *ttl > 0);

        Self {
            url,
            response_timeout,
            key_prefix,
            revocation_ttl,
            ..Default::default()
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Use raw keys without a prefix
    pub fn without_prefix(mut self) -> Self {
        self.key_prefix = None;
        self
    }

    /// Expire revocation entries after `seconds`
    pub fn with_revocation_ttl(mut self, seconds: u64) -> Self {
        self.revocation_ttl = Some(seconds);
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

/// Turn a bare `host:port` DSN into a `redis://` URL
pub fn normalize_redis_url(dsn: &str) -> String {
    if dsn.contains("://") {
        dsn.to_string()
    } else {
        format!("redis://{}", dsn)
    }
}

fn default_key_prefix() -> Option<String> {
    Some(String::from("refresh"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.url, "redis://localhost:6379");
        assert_eq!(config.response_timeout, 5);
        assert!(config.revocation_ttl.is_none());
    }

    #[test]
    fn test_cache_config_with_prefix() {
        let config = CacheConfig::new("redis://cache:6379").with_prefix("tk");
        assert_eq!(config.make_key("42"), "tk:42");
    }

    #[test]
    fn test_cache_key_without_prefix() {
        let config = CacheConfig::default().without_prefix();
        assert_eq!(config.make_key("42"), "42");
    }

    #[test]
    fn test_normalize_redis_url() {
        assert_eq!(normalize_redis_url("localhost:6379"), "redis://localhost:6379");
        assert_eq!(normalize_redis_url("redis://cache:6380"), "redis://cache:6380");
    }
}
