// Test helpers are intentionally partially used
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Once;
use tower::ServiceExt;
use unitrade::{build_router, create_memory_store, create_noop_metrics};

static INIT: Once = Once::new();

// ============================================================================
// Test Setup
// ============================================================================

/// Initialize tracing once for the whole test binary.
pub fn init_tracing() {
    // ---
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_test_writer()
            .try_init();
    });
}

/// Router over a fresh in-memory store, so every test starts empty.
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    // ---
    pub fn new() -> Self {
        // ---
        init_tracing();
        let metrics = create_noop_metrics().expect("noop metrics");
        Self::with_router(build_router(create_memory_store(), "@", metrics))
    }

    pub fn with_router(router: Router) -> Self {
        // ---
        Self { router }
    }

    /// Send a request and return the status with the body parsed as JSON
    /// (or `Value::Null` for an empty body, a JSON string for plain text).
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        // ---
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        // ---
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        // ---
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Register an account with a valid form.
    pub async fn register(&self, email: &str) -> Value {
        // ---
        let (status, body) = self
            .post(
                "/auth/register",
                json!({
                    "name": "Test Student",
                    "email": email,
                    "phone": "0123456789",
                    "password": "hunter22",
                    "confirmPassword": "hunter22"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body["data"].clone()
    }

    /// Register and log in, returning the session user.
    pub async fn login_as(&self, email: &str) -> Value {
        // ---
        self.register(email).await;
        let (status, body) = self
            .post(
                "/auth/login",
                json!({ "email": email, "password": "hunter22" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["data"].clone()
    }

    /// Post a listing as the logged-in user.
    pub async fn post_product(&self, title: &str, category: &str, price: &str) -> (StatusCode, Value) {
        // ---
        self.post(
            "/products",
            json!({
                "title": title,
                "price": price,
                "description": "Meet on campus",
                "category": category,
                "condition": "Good"
            }),
        )
        .await
    }
}
