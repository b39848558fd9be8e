// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use handlers::*;

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod marketplace;
mod session;

// Hoist up only the public symbol(s)
pub use marketplace::{Marketplace, Profile};
pub use session::Session;

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_memory_store, // ---
    create_metrics,
    create_noop_metrics,
    create_prom_metrics,
    create_redis_store,
    create_store,
    MemoryStore,
    RedisStore,
};

/// Build the HTTP router with the store and metrics selected by environment variables.
pub fn create_router() -> Result<Router> {
    // ---
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt::try_init().ok(); // Ignores if already initialized

    let store = create_store(&config.store)?;
    let metrics = create_metrics(config.metrics)?;

    Ok(build_router(store, &config.store.key_prefix, metrics))
}

/// Build the HTTP router over an explicit store and metrics backend.
pub fn build_router(
    store: domain::StorePtr,
    key_prefix: &str,
    metrics: domain::MetricsPtr,
) -> Router {
    // ---
    let marketplace = Arc::new(Marketplace::new(store, key_prefix, metrics.clone()));
    let app_state = AppState::new(marketplace, metrics);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .nest(
            "/auth",
            Router::new()
                .route("/register", post(register))
                .route("/login", post(login))
                .route("/logout", post(logout))
                .route("/session", get(current_session)),
        )
        .route("/profile", get(profile))
        .route("/profile/products", get(my_products))
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            track_requests,
        ))
        .with_state(app_state)
}
