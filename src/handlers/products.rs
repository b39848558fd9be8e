use super::shared_types::{ApiResponse, ProductDetail};
use crate::app_state::AppState;
use crate::domain::{MarketError, NewProduct, Product, ALL_CATEGORIES};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    search: Option<String>,
    category: Option<String>,
}

/// Handler for browsing listings (GET /products?search=&category=).
///
/// Missing parameters mean "no search text" and "All" categories.
#[tracing::instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<ApiResponse<Vec<Product>>, MarketError> {
    // ---
    let search = query.search.unwrap_or_default();
    let category = query.category.unwrap_or_else(|| ALL_CATEGORIES.to_string());

    let products = state
        .marketplace()
        .list_available(&search, &category)
        .await?;

    Ok(ApiResponse { data: products })
}

/// Handler for posting a listing (POST /products).
///
/// The seller is whoever is logged in; without a session this is `401`.
pub async fn create_product(
    State(state): State<AppState>,
    Json(form): Json<NewProduct>,
) -> Result<(StatusCode, ApiResponse<Product>), MarketError> {
    // ---
    let session = state.marketplace().require_session().await?;
    let product = state.marketplace().create_product(form, &session).await?;

    Ok((StatusCode::CREATED, ApiResponse { data: product }))
}

/// Handler for a single listing (GET /products/{id}).
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<ProductDetail>, MarketError> {
    // ---
    let product = state.marketplace().get_product(&id).await?;

    Ok(ApiResponse {
        data: product.into(),
    })
}

/// Handler for the logged-in user's own listings (GET /profile/products).
pub async fn my_products(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Product>>, MarketError> {
    // ---
    let session = state.marketplace().require_session().await?;
    let products = state
        .marketplace()
        .list_by_seller(session.user_id())
        .await?;

    Ok(ApiResponse { data: products })
}
