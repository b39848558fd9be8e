use anyhow::Result;
use std::sync::Arc;

/// Logical collections persisted by the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKey {
    Users,
    CurrentUser,
    Products,
}

impl CollectionKey {
    // ---
    pub fn as_str(&self) -> &'static str {
        // ---
        match self {
            CollectionKey::Users => "users",
            CollectionKey::CurrentUser => "currentUser",
            CollectionKey::Products => "products",
        }
    }
}

/// Abstraction for the key-value storage that holds every collection.
///
/// Values are opaque JSON text. Every `set` replaces the whole value;
/// there are no partial updates and no transactions.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    // ---
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<()>;
}

/// Type alias for any backend that implements KeyValueStore.
pub type StorePtr = Arc<dyn KeyValueStore>;
