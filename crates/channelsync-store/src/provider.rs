//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::info;

use channelsync_core::config::store::StoreConfig;
use channelsync_core::error::AppError;
use channelsync_core::result::AppResult;
use channelsync_core::traits::document_store::DocumentStore;

/// Store manager that wraps the configured document store.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner document store.
    inner: Arc<dyn DocumentStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn DocumentStore> = match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis document store");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Arc::new(crate::redis::RedisDocumentStore::new(client))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory document store");
                Arc::new(crate::memory::MemoryDocumentStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, redis"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Get a shared handle to the inner store.
    pub fn store(&self) -> Arc<dyn DocumentStore> {
        Arc::clone(&self.inner)
    }
}

#[async_trait]
impl DocumentStore for StoreManager {
    async fn get(&self, key: &str) -> AppResult<Option<Bytes>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Bytes) -> AppResult<()> {
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.inner.delete(key).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
