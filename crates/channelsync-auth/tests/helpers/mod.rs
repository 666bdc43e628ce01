//! Shared test helpers for authenticator integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use channelsync_auth::{Authenticator, PasswordHasher};
use channelsync_core::error::AppError;
use channelsync_core::result::AppResult;
use channelsync_core::traits::document_store::DocumentStore;
use channelsync_store::MemoryDocumentStore;

/// Test context: an authenticator plus direct access to its store.
pub struct TestAuth {
    /// The façade under test.
    pub auth: Authenticator,
    /// The store behind it.
    pub store: MemoryDocumentStore,
}

impl TestAuth {
    /// Fresh authenticator over an empty in-memory store.
    pub fn new() -> Self {
        let store = MemoryDocumentStore::new();
        let auth = Authenticator::new(Arc::new(store.clone()), Arc::new(fast_hasher()));
        Self { auth, store }
    }
}

/// Argon2id with the smallest legal costs so tests stay quick.
pub fn fast_hasher() -> PasswordHasher {
    PasswordHasher::with_params(8, 1, 1).expect("valid test params")
}

/// Build a channel list.
pub fn channels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Store whose every call fails, counting how often it was reached.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

impl FailingStore {
    fn fail(&self) -> AppError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        AppError::store("backend unavailable")
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn get(&self, _key: &str) -> AppResult<Option<Bytes>> {
        Err(self.fail())
    }

    async fn set(&self, _key: &str, _value: Bytes) -> AppResult<()> {
        Err(self.fail())
    }

    async fn delete(&self, _key: &str) -> AppResult<()> {
        Err(self.fail())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(false)
    }
}
