//! Invite handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use taskhub_core::error::AppError;

use crate::dto::request::{AcceptInviteRequest, CreateInviteRequest};
use crate::dto::response::{AcceptInviteResponse, InviteResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/workspaces/{id}/invites (Admin or above)
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(workspace_id): Path<Uuid>,
    Json(req): Json<CreateInviteRequest>,
) -> Result<(StatusCode, Json<InviteResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let invite = state
        .invite_service
        .create(&user, workspace_id, &req.email, req.role)
        .await?;

    Ok((StatusCode::CREATED, Json(invite.into())))
}

/// POST /api/invites/accept (the caller's email must match the invite)
pub async fn accept(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<AcceptInviteRequest>,
) -> Result<Json<AcceptInviteResponse>, ApiError> {
    let (invite, membership) = state.invite_service.accept(&user, &req.token).await?;

    Ok(Json(AcceptInviteResponse {
        workspace_id: invite.workspace_id,
        role: membership.role,
    }))
}
