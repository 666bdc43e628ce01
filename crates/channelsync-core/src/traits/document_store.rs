//! Document store trait for pluggable key/value backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for the key/value document store that backs identity records.
///
/// Keys are UTF-8 strings; values are opaque bytes (JSON for user records).
/// `set` is a blind overwrite, so concurrent writers to one key resolve as
/// last-writer-wins at the backend.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<Bytes>>;

    /// Store a value, replacing any existing value at that key.
    async fn set(&self, key: &str, value: Bytes) -> AppResult<()>;

    /// Delete a key.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check that the store backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
