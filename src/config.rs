// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads a required environment variable.
///
/// # Behavior
/// - Fails fast if the variable is missing
/// - Produces a clear, human-readable error message
/// - Intended for startup-time configuration validation
macro_rules! required_env {
    // ---
    ($key:literal) => {
        std::env::var($key)
            .map_err(|_| anyhow::anyhow!(concat!("Missing required configuration: ", $key)))?
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails due to a missing
/// required environment variable.
macro_rules! assert_missing_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Missing required configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: store::StoreConfig,
    pub metrics: MetricsKind,
    pub server: server::ServerConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any required configuration is missing or invalid.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            store: store::StoreConfig::from_env()?,
            metrics: MetricsKind::from_env()?,
            server: server::ServerConfig::from_env(),
        })
    }
}

// ============================================================
// Store configuration
// ============================================================

mod store {
    // ---
    use super::*;

    /// Which key-value backend holds the collections.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum StoreKind {
        /// Process-local map; contents vanish on exit.
        Memory,
        Redis { url: String },
    }

    /// Storage configuration derived from environment variables.
    #[derive(Debug, Clone)]
    pub struct StoreConfig {
        pub kind: StoreKind,

        /// Prepended to every collection key. Defaults to `@`, which
        /// yields the device layout (`@users`, `@currentUser`, `@products`).
        pub key_prefix: String,
    }

    impl StoreConfig {
        /// Builds a [`StoreConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error for an unknown store type, or when the Redis
        /// store is selected without `UNITRADE_REDIS_URL`.
        pub fn from_env() -> Result<Self> {
            // ---
            let store_type = optional_env_parse!("UNITRADE_STORE_TYPE", String, "memory".into());
            let key_prefix = optional_env_parse!("UNITRADE_KEY_PREFIX", String, "@".into());

            let kind = match store_type.as_str() {
                "memory" => StoreKind::Memory,
                "redis" => StoreKind::Redis {
                    url: required_env!("UNITRADE_REDIS_URL"),
                },
                other => anyhow::bail!("Unknown UNITRADE_STORE_TYPE: {other}"),
            };

            Ok(Self { kind, key_prefix })
        }
    }
}
pub use store::{StoreConfig, StoreKind};

// ============================================================
// Metrics configuration
// ============================================================

/// Which metrics backend records marketplace events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsKind {
    Noop,
    Prometheus,
}

impl MetricsKind {
    /// Reads `UNITRADE_METRICS_TYPE` (`noop` or `prom`, default `noop`).
    pub fn from_env() -> Result<Self> {
        // ---
        let metrics_type = optional_env_parse!("UNITRADE_METRICS_TYPE", String, "noop".into());
        match metrics_type.as_str() {
            "noop" => Ok(MetricsKind::Noop),
            "prom" => Ok(MetricsKind::Prometheus),
            other => anyhow::bail!("Unknown UNITRADE_METRICS_TYPE: {other}"),
        }
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---

    /// HTTP adapter settings.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Socket address to listen on. Defaults to `127.0.0.1:8080`.
        pub bind_addr: String,
    }

    impl ServerConfig {
        pub fn from_env() -> Self {
            // ---
            Self {
                bind_addr: optional_env_parse!(
                    "UNITRADE_BIND_ADDR",
                    String,
                    "127.0.0.1:8080".into()
                ),
            }
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Tests
// ============================================================
