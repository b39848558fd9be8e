//! Marketplace operations over the persisted collections.
//!
//! [`Marketplace`] is the data-access contract consumed by the
//! presentation layer: account flows live in `accounts.rs`, listing
//! flows in `catalog.rs`. Every operation loads the collections it needs,
//! works on a local copy, and writes the whole collection back, so a
//! failed write leaves the stored state as it was.

mod accounts;
mod catalog;
mod collections;
mod ids;
mod validation;

#[cfg(test)]
mod tests;

pub use accounts::Profile;
use collections::Collections;

use crate::domain::{MarketError, MetricsPtr, StorePtr};
use ids::IdGenerator;

pub struct Marketplace {
    // ---
    collections: Collections,
    metrics: MetricsPtr,
    ids: IdGenerator,
}

impl Marketplace {
    // ---
    pub fn new(store: StorePtr, key_prefix: impl Into<String>, metrics: MetricsPtr) -> Self {
        // ---
        Self {
            collections: Collections::new(store, key_prefix),
            metrics,
            ids: IdGenerator::new(),
        }
    }

    /// Check that the backing store answers.
    pub async fn ping(&self) -> anyhow::Result<()> {
        // ---
        self.collections.ping().await
    }
}

/// Log a backend failure and wrap it for the caller.
fn storage_failure(operation: &'static str, err: anyhow::Error) -> MarketError {
    // ---
    tracing::error!("Storage failure during {}: {:#}", operation, err);
    MarketError::storage(operation, err)
}
