use crate::domain::{MarketError, Product, User};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Wrapper type for successful API responses.
///
/// Encapsulates the data payload and prepares it for JSON serialization.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        axum::Json(self).into_response()
    }
}

/// Body of every failed request. `error` is safe to show to the user.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    // ---
    pub error: String,
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        // ---
        let status = match &self {
            MarketError::Validation(_) => StatusCode::BAD_REQUEST,
            MarketError::DuplicateEmail => StatusCode::CONFLICT,
            MarketError::InvalidCredentials | MarketError::NotLoggedIn => StatusCode::UNAUTHORIZED,
            MarketError::NotFound { .. } => StatusCode::NOT_FOUND,
            MarketError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            error: self.user_message(),
        };
        (status, axum::Json(body)).into_response()
    }
}

/// A user as returned to clients. The password never leaves the store.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    // ---
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        // ---
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            created_at: user.created_at,
        }
    }
}

/// A product with the dialer URI for contacting its seller.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    // ---
    #[serde(flatten)]
    pub product: Product,
    pub dial_uri: String,
}

impl From<Product> for ProductDetail {
    fn from(product: Product) -> Self {
        // ---
        let dial_uri = product.dial_uri();
        Self { product, dial_uri }
    }
}
