//! Project handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use taskhub_core::error::AppError;

use crate::dto::request::CreateProjectRequest;
use crate::dto::response::ProjectResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/workspaces/{id}/projects (Member or above)
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(workspace_id): Path<Uuid>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let project = state
        .project_service
        .create(&user, workspace_id, &req.name, req.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /api/workspaces/{id}/projects
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(workspace_id): Path<Uuid>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = state.project_service.list(&user, workspace_id).await?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}
