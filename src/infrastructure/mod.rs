pub mod metrics;
mod store;

// Re-export the factory functions for easy access
pub use self::metrics::{create_metrics, create_noop_metrics, create_prom_metrics};
pub use store::{create_memory_store, create_redis_store, create_store, MemoryStore, RedisStore};
