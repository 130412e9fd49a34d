//! User self-service handlers.

use axum::Json;

use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// GET /api/users/me
pub async fn me(user: CurrentUser) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(user.0.into()))
}
