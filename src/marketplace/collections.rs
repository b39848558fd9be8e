//! Typed access to the three persisted collections.
//!
//! Each collection is one JSON value under one key. Loads decode the
//! whole value and saves replace it; an absent key reads as empty.

use crate::domain::{CollectionKey, Product, StorePtr, User};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

pub struct Collections {
    // ---
    store: StorePtr,
    key_prefix: String,

    /// Serializes read-modify-write sequences within this process.
    write_lock: Mutex<()>,
}

impl Collections {
    // ---
    pub fn new(store: StorePtr, key_prefix: impl Into<String>) -> Self {
        // ---
        Self {
            store,
            key_prefix: key_prefix.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Physical key for a logical collection.
    pub fn key(&self, collection: CollectionKey) -> String {
        // ---
        format!("{}{}", self.key_prefix, collection.as_str())
    }

    /// Hold the returned guard across a load/modify/save sequence.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // ---
        self.write_lock.lock().await
    }

    pub async fn users(&self) -> Result<Vec<User>> {
        // ---
        self.load_list(CollectionKey::Users).await
    }

    pub async fn save_users(&self, users: &[User]) -> Result<()> {
        // ---
        self.save_value(CollectionKey::Users, users).await
    }

    pub async fn products(&self) -> Result<Vec<Product>> {
        // ---
        self.load_list(CollectionKey::Products).await
    }

    pub async fn save_products(&self, products: &[Product]) -> Result<()> {
        // ---
        self.save_value(CollectionKey::Products, products).await
    }

    pub async fn current_user(&self) -> Result<Option<User>> {
        // ---
        self.load_value(CollectionKey::CurrentUser).await
    }

    pub async fn set_current_user(&self, user: &User) -> Result<()> {
        // ---
        self.save_value(CollectionKey::CurrentUser, user).await
    }

    pub async fn clear_current_user(&self) -> Result<()> {
        // ---
        let key = self.key(CollectionKey::CurrentUser);
        self.store.remove(&key).await
    }

    pub async fn ping(&self) -> Result<()> {
        // ---
        self.store.ping().await
    }

    async fn load_list<T: DeserializeOwned>(&self, collection: CollectionKey) -> Result<Vec<T>> {
        // ---
        Ok(self.load_value(collection).await?.unwrap_or_default())
    }

    async fn load_value<T: DeserializeOwned>(&self, collection: CollectionKey) -> Result<Option<T>> {
        // ---
        let key = self.key(collection);
        match self.store.get(&key).await? {
            Some(blob) => {
                let value = serde_json::from_str(&blob)
                    .with_context(|| format!("corrupt JSON under {key}"))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn save_value<T: Serialize + ?Sized>(
        &self,
        collection: CollectionKey,
        value: &T,
    ) -> Result<()> {
        // ---
        let key = self.key(collection);
        let blob = serde_json::to_string(value)
            .with_context(|| format!("failed to encode {key}"))?;
        self.store.set(&key, blob).await
    }
}
