//! Store doubles for session manager tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::StoreError;
use crate::repositories::RevocationStore;

/// Store whose every call fails as if the server were unreachable
pub struct UnavailableStore;

#[async_trait]
impl RevocationStore for UnavailableStore {
    async fn put(&self, _user_id: &str, _refresh_token: &str) -> Result<(), StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn get(&self, _user_id: &str) -> Result<String, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn delete(&self, _user_id: &str) -> Result<(), StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}

/// Store that counts calls and keeps nothing
#[derive(Default)]
pub struct CountingStore {
    pub puts: AtomicUsize,
    pub gets: AtomicUsize,
}

impl CountingStore {
    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RevocationStore for CountingStore {
    async fn put(&self, _user_id: &str, _refresh_token: &str) -> Result<(), StoreError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get(&self, _user_id: &str) -> Result<String, StoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::NotFound)
    }

    async fn delete(&self, _user_id: &str) -> Result<(), StoreError> {
        Ok(())
    }
}
