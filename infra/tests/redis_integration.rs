//! Integration tests for the Redis revocation store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p tk_infra --test redis_integration -- --ignored

use tk_core::errors::StoreError;
use tk_core::repositories::RevocationStore;
use tk_infra::cache::{CacheConfig, RedisClient, RedisRevocationStore};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn test_config() -> CacheConfig {
    init_tracing();
    CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    )
    .with_prefix("tk-test")
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_health_check() {
    let client = RedisClient::new(test_config()).unwrap();

    assert!(client.health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_put_get_delete() {
    let store = RedisRevocationStore::from_config(test_config()).unwrap();
    let user_id = "integration-put-get";

    store.put(user_id, "refresh-a").await.unwrap();
    assert_eq!(store.get(user_id).await.unwrap(), "refresh-a");

    store.put(user_id, "refresh-b").await.unwrap();
    assert_eq!(store.get(user_id).await.unwrap(), "refresh-b");

    store.delete(user_id).await.unwrap();
    assert_eq!(store.get(user_id).await, Err(StoreError::NotFound));

    // Deleting again is not an error
    store.delete(user_id).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_entry_without_ttl_persists() {
    let store = RedisRevocationStore::from_config(test_config()).unwrap();
    let client = RedisClient::new(test_config()).unwrap();
    let user_id = "integration-no-ttl";

    store.put(user_id, "refresh").await.unwrap();
    assert_eq!(
        client.get(&store.key_for(user_id)).await.unwrap(),
        Some("refresh".to_string())
    );

    store.delete(user_id).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_entry_with_ttl_expires() {
    let store =
        RedisRevocationStore::from_config(test_config().with_revocation_ttl(1)).unwrap();
    let user_id = "integration-ttl";

    store.put(user_id, "refresh").await.unwrap();
    assert!(store.get(user_id).await.is_ok());

    tokio::time::sleep(std::time::Duration::from_millis(2100)).await;
    assert_eq!(store.get(user_id).await, Err(StoreError::NotFound));
}
