//! Account handlers: register, login, logout, the current session and
//! the profile.

use super::shared_types::{ApiResponse, UserView};
use crate::app_state::AppState;
use crate::domain::{Credentials, MarketError, NewUser};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    user: UserView,
    products_count: usize,
}

/// POST /auth/register
///
/// Responds `201 Created` with the new user. Validation failures are
/// `400`, a taken email is `409`.
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<NewUser>,
) -> Result<(StatusCode, ApiResponse<UserView>), MarketError> {
    // ---
    let user = state.marketplace().register(form).await?;

    Ok((StatusCode::CREATED, ApiResponse { data: user.into() }))
}

/// POST /auth/login
///
/// Opens the session and responds with the logged-in user, or `401` for
/// unknown credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<ApiResponse<UserView>, MarketError> {
    // ---
    let session = state.marketplace().login(credentials).await?;

    Ok(ApiResponse {
        data: session.into_user().into(),
    })
}

/// POST /auth/logout
pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, MarketError> {
    // ---
    state.marketplace().logout().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/session
///
/// Responds with the logged-in user, or `404` when nobody is logged in.
pub async fn current_session(
    State(state): State<AppState>,
) -> Result<ApiResponse<UserView>, MarketError> {
    // ---
    let session = state
        .marketplace()
        .current_session()
        .await?
        .ok_or_else(|| MarketError::NotFound {
            kind: "session",
            id: "current".to_string(),
        })?;

    Ok(ApiResponse {
        data: session.into_user().into(),
    })
}

/// GET /profile
///
/// The logged-in user with their listing count; `401` without a session.
pub async fn profile(
    State(state): State<AppState>,
) -> Result<ApiResponse<ProfileResponse>, MarketError> {
    // ---
    let session = state.marketplace().require_session().await?;
    let profile = state.marketplace().profile(&session).await?;

    Ok(ApiResponse {
        data: ProfileResponse {
            user: profile.user.into(),
            products_count: profile.products_count,
        },
    })
}
