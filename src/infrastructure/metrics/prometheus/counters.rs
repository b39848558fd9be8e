use metrics::{counter, histogram};
use std::time::Instant;

/// Increment a counter for registered users.
pub fn increment_user_registered() {
    counter!("unitrade_users_registered_total").increment(1);
}

/// Increment the login counter, labelled by outcome.
pub fn increment_login_attempt(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!("unitrade_login_attempts_total", "outcome" => outcome).increment(1);
}

/// Increment a counter for posted products.
pub fn increment_product_created() {
    counter!("unitrade_products_created_total").increment(1);
}

/// Track HTTP request latency using a histogram.
pub fn track_http_request(start: Instant, path: &str, method: &str, status: u16) {
    let elapsed = start.elapsed();
    histogram!(
        "http_request_duration_seconds",
        "path" => path.to_string(),
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .record(elapsed);
}
