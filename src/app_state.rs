//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The state is cheaply cloneable
//! (`Arc` internally) so each request gets its own handle without copying
//! resources.

use crate::domain::MetricsPtr;
use crate::marketplace::Marketplace;
use std::sync::Arc;

/// Shared application state passed to all Axum handlers.
///
/// Built once in `build_router()` and never mutated afterwards. Handlers
/// reach the data-access contract only through [`Marketplace`].
#[derive(Clone)]
pub(crate) struct AppState {
    /// Marketplace operations over the configured store.
    marketplace: Arc<Marketplace>,

    /// Metrics implementation for recording application events.
    ///
    /// Either Prometheus-backed (production) or no-op (testing/development).
    metrics: MetricsPtr,
}

impl AppState {
    // ---

    pub fn new(marketplace: Arc<Marketplace>, metrics: MetricsPtr) -> Self {
        // ---
        AppState {
            marketplace,
            metrics,
        }
    }

    /// Get a reference to the marketplace.
    pub(crate) fn marketplace(&self) -> &Marketplace {
        // ---
        &self.marketplace
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }
}
