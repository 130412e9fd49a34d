//! Dashboard handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use taskhub_service::dashboard::DashboardSummary;

use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/workspaces/{id}/dashboard (served through a short-TTL cache)
pub async fn summary(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(workspace_id): Path<Uuid>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let summary = state.dashboard_service.summary(&user, workspace_id).await?;

    Ok(Json(summary))
}
