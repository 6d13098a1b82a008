//! Tests for the in-memory revocation store

use crate::errors::StoreError;
use crate::repositories::revocation::{InMemoryRevocationStore, RevocationStore};

#[tokio::test]
async fn test_put_and_get() {
    let store = InMemoryRevocationStore::new();
    store.put("1", "refresh-a").await.unwrap();

    assert_eq!(store.get("1").await.unwrap(), "refresh-a");
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let store = InMemoryRevocationStore::new();

    assert_eq!(store.get("1").await, Err(StoreError::NotFound));
}

#[tokio::test]
async fn test_put_overwrites_single_entry() {
    let store = InMemoryRevocationStore::new();
    store.put("1", "refresh-a").await.unwrap();
    store.put("1", "refresh-b").await.unwrap();

    assert_eq!(store.get("1").await.unwrap(), "refresh-b");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let store = InMemoryRevocationStore::new();
    store.put("1", "refresh-a").await.unwrap();
    store.delete("1").await.unwrap();

    assert_eq!(store.get("1").await, Err(StoreError::NotFound));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_delete_missing_is_idempotent() {
    let store = InMemoryRevocationStore::new();

    assert!(store.delete("1").await.is_ok());
    assert!(store.delete("1").await.is_ok());
}

#[tokio::test]
async fn test_entries_are_per_user() {
    let store = InMemoryRevocationStore::new();
    store.put("1", "refresh-a").await.unwrap();
    store.put("2", "refresh-b").await.unwrap();
    store.delete("1").await.unwrap();

    assert_eq!(store.get("2").await.unwrap(), "refresh-b");
}
