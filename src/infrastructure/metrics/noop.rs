use crate::domain::{Metrics, MetricsPtr};
use std::sync::Arc;
use std::time::Instant;

/// Metrics backend that drops every event and renders nothing.
///
/// Default when `UNITRADE_METRICS_TYPE` is unset; used by most tests.
pub struct NoopMetrics;

impl Metrics for NoopMetrics {
    // ---
    fn render(&self) -> String {
        String::new()
    }
    fn record_user_registered(&self) {}
    fn record_login_attempt(&self, _: bool) {}
    fn record_product_created(&self) {}
    fn record_http_request(&self, _: Instant, _: &str, _: &str, _: u16) {}
}

/// Creates a new no-op metrics implementation.
pub fn create() -> anyhow::Result<MetricsPtr> {
    Ok(Arc::new(NoopMetrics))
}
