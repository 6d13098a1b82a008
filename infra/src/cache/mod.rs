//! Cache module for Redis-backed storage
//!
//! Provides a lazily connected Redis client and the revocation store that
//! keeps the current refresh token per user.

pub mod redis_client;
pub mod revocation_store;


pub use redis_client::RedisClient;
pub use revocation_store::RedisRevocationStore;

// Re-export commonly used types
pub use tk_shared::config::cache::CacheConfig;
