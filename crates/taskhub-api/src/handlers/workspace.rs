//! Workspace handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use taskhub_core::error::AppError;

use crate::dto::request::CreateWorkspaceRequest;
use crate::dto::response::{MemberResponse, WorkspaceResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/workspaces (creator becomes Owner)
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateWorkspaceRequest>,
) -> Result<(StatusCode, Json<WorkspaceResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let workspace = state.workspace_service.create(&user, &req.name).await?;

    Ok((StatusCode::CREATED, Json(workspace.into())))
}

/// GET /api/workspaces (the caller's workspaces)
pub async fn list_mine(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<WorkspaceResponse>>, ApiError> {
    let workspaces = state.workspace_service.list_for_user(&user).await?;

    Ok(Json(workspaces.into_iter().map(Into::into).collect()))
}

/// GET /api/workspaces/{id}/members
pub async fn list_members(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(workspace_id): Path<Uuid>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = state
        .workspace_service
        .list_members(&user, workspace_id)
        .await?;

    Ok(Json(members.into_iter().map(Into::into).collect()))
}

/// GET /api/workspaces/{id}/me (the caller's own membership)
pub async fn membership(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(workspace_id): Path<Uuid>,
) -> Result<Json<MemberResponse>, ApiError> {
    let membership = state
        .workspace_service
        .membership_of(&user, workspace_id)
        .await?;

    Ok(Json(membership.into()))
}
