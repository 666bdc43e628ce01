//! In-memory document store implementation using the dashmap crate.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use tracing::debug;

use channelsync_core::result::AppResult;
use channelsync_core::traits::document_store::DocumentStore;

/// In-memory document store.
///
/// Cloning shares the underlying map, so clones observe each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    /// Records keyed by document ID.
    docs: Arc<DashMap<String, Bytes>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, key: &str) -> AppResult<Option<Bytes>> {
        Ok(self.docs.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: Bytes) -> AppResult<()> {
        debug!(key, size = value.len(), "Storing document");
        self.docs.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let removed = self.docs.remove(key).is_some();
        debug!(key, removed, "Deleted document");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get() {
        let store = MemoryDocumentStore::new();
        store.set("key1", Bytes::from_static(b"value1")).await.unwrap();
        let val = store.get("key1").await.unwrap();
        assert_eq!(val, Some(Bytes::from_static(b"value1")));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryDocumentStore::new();
        store.set("key", Bytes::from_static(b"first")).await.unwrap();
        store.set("key", Bytes::from_static(b"second")).await.unwrap();
        assert_eq!(
            store.get("key").await.unwrap(),
            Some(Bytes::from_static(b"second"))
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryDocumentStore::new();
        store.set("key2", Bytes::from_static(b"value2")).await.unwrap();
        store.delete("key2").await.unwrap();
        assert_eq!(store.get("key2").await.unwrap(), None);

        // Missing keys delete cleanly.
        store.delete("key2").await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryDocumentStore::new();
        let other = store.clone();
        store.set("shared", Bytes::from_static(b"1")).await.unwrap();
        assert!(other.get("shared").await.unwrap().is_some());
    }
}
