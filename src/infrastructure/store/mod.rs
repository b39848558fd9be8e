mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

use crate::config::{StoreConfig, StoreKind};
use crate::domain::StorePtr;
use anyhow::Result;
use std::sync::Arc;

/// Creates an empty process-local store.
pub fn create_memory_store() -> StorePtr {
    // ---
    Arc::new(MemoryStore::new())
}

/// Creates a Redis-backed store. Connections are opened on demand, so an
/// unreachable server is reported by the first operation, not here.
pub fn create_redis_store(url: &str) -> Result<StorePtr> {
    // ---
    Ok(Arc::new(RedisStore::open(url)?))
}

/// Creates the store selected by configuration.
pub fn create_store(config: &StoreConfig) -> Result<StorePtr> {
    // ---
    match &config.kind {
        StoreKind::Memory => {
            tracing::info!("Using in-memory store");
            Ok(create_memory_store())
        }
        StoreKind::Redis { url } => {
            tracing::info!("Using Redis store");
            create_redis_store(url)
        }
    }
}
