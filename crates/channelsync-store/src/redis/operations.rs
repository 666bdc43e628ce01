//! Redis document store implementation.

use async_trait::async_trait;
use bytes::Bytes;
use redis::AsyncCommands;
use tracing::debug;

use channelsync_core::error::{AppError, ErrorKind};
use channelsync_core::result::AppResult;
use channelsync_core::traits::document_store::DocumentStore;

use super::client::RedisClient;

/// Redis-backed document store. Records never expire.
#[derive(Debug, Clone)]
pub struct RedisDocumentStore {
    /// Redis client.
    client: RedisClient,
}

impl RedisDocumentStore {
    /// Create a new Redis document store.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Store, format!("Redis error: {e}"), e)
    }
}

#[async_trait]
impl DocumentStore for RedisDocumentStore {
    async fn get(&self, key: &str) -> AppResult<Option<Bytes>> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Option<Vec<u8>> = conn.get(&full_key).await.map_err(Self::map_err)?;
        Ok(result.map(Bytes::from))
    }

    async fn set(&self, key: &str, value: Bytes) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = conn
            .set(&full_key, &value[..])
            .await
            .map_err(Self::map_err)?;
        debug!(key = %full_key, "Stored document");
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let removed: u64 = conn.del(&full_key).await.map_err(Self::map_err)?;
        debug!(key = %full_key, removed, "Deleted document");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }
}
