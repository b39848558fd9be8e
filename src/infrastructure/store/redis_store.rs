use crate::domain::KeyValueStore;
use anyhow::{Context, Result};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};

/// Redis-backed store. Each collection lives in one Redis string key.
pub struct RedisStore {
    // ---
    client: Client,
}

impl RedisStore {
    // ---
    pub fn open(url: &str) -> Result<Self> {
        // ---
        let client = Client::open(url).context("invalid Redis URL")?;
        Ok(Self { client })
    }

    /// Creates a new multiplexed Redis connection.
    async fn get_conn(&self) -> Result<MultiplexedConnection> {
        // ---
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|err| {
                tracing::error!("Failed to connect to Redis: {:?}", err);
                anyhow::Error::new(err).context("Redis connection failed")
            })
    }
}

#[async_trait::async_trait]
impl KeyValueStore for RedisStore {
    // ---
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // ---
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .with_context(|| format!("GET {key} failed"))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        // ---
        let mut conn = self.get_conn().await?;
        let _: () = conn
            .set(key, value)
            .await
            .with_context(|| format!("SET {key} failed"))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        // ---
        let mut conn = self.get_conn().await?;
        let _: u64 = conn
            .del(key)
            .await
            .with_context(|| format!("DEL {key} failed"))?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        // ---
        let mut conn = self.get_conn().await?;
        let _: String = conn.ping().await.context("PING failed")?;
        Ok(())
    }
}
