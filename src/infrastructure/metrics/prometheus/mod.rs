mod counters;
mod prometheus_metrics;
mod recorder;

pub use prometheus_metrics::PrometheusMetrics;
use std::sync::Arc;

// Re-export utilities for internal use within this module
pub(crate) use counters::{
    increment_login_attempt, increment_product_created, increment_user_registered,
    track_http_request,
};
pub(crate) use recorder::{init_metrics, render_metrics};

/// Creates a new Prometheus metrics implementation.
///
/// Installs the global recorder on first use; the rendered text is served
/// by the `/metrics` endpoint.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing Prometheus metrics");
    init_metrics()?;

    Ok(Arc::new(PrometheusMetrics::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_is_repeatable() {
        assert!(create().is_ok());
        assert!(create().is_ok());
    }

    #[test]
    fn test_counters_show_up_in_render() {
        let metrics = create().unwrap();
        metrics.record_product_created();
        metrics.record_login_attempt(false);

        let text = metrics.render();
        assert!(text.contains("unitrade_products_created_total"));
        assert!(text.contains("unitrade_login_attempts_total"));
    }
}
