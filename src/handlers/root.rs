use axum::response::IntoResponse;

pub async fn root_handler() -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        r#"Welcome to UniTrade - Campus Marketplace
Version: {version}

Available endpoints:
  - POST   /auth/register      - Create an account
  - POST   /auth/login         - Log in and open the session
  - POST   /auth/logout        - Clear the session
  - GET    /auth/session       - Currently logged-in user
  - GET    /profile            - Profile with listing count
  - GET    /profile/products   - Listings posted by the logged-in user
  - GET    /products           - Browse (?search=...&category=...)
  - POST   /products           - Post a listing as the logged-in user
  - GET    /products/{{id}}      - Listing details
  - GET    /health             - Light health check
  - GET    /health?mode=full   - Full health check (includes the store)
  - GET    /metrics            - Metrics in Prometheus text format
"#
    )
}
