//! Auth handlers — register, login, refresh, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use taskhub_core::error::AppError;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{MessageResponse, TokenResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/register
///
/// Registration signs the user straight in: the response is a token pair.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let (tokens, _user) = state
        .session_manager
        .register(&req.email, &req.password, req.name.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(tokens.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (tokens, _user) = state.session_manager.login(&req.email, &req.password).await?;

    Ok(Json(tokens.into()))
}

/// POST /api/auth/refresh
///
/// Rotates the refresh token; the one sent here is dead afterwards.
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let tokens = state.session_manager.refresh(&req.refresh_token).await?;

    Ok(Json(tokens.into()))
}

/// POST /api/auth/logout
///
/// Revokes the refresh token. Access tokens stay valid until their short
/// TTL runs out.
pub async fn logout(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.session_manager.logout(&req.refresh_token).await?;

    Ok(Json(MessageResponse {
        message: "Logged out".to_string(),
    }))
}
