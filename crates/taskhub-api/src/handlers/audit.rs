//! Audit log handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use taskhub_core::types::pagination::{PageRequest, PageResponse};

use crate::dto::response::AuditLogResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/workspaces/{id}/audit-logs (Admin or above)
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(workspace_id): Path<Uuid>,
    Query(page): Query<PageRequest>,
) -> Result<Json<PageResponse<AuditLogResponse>>, ApiError> {
    let logs = state
        .audit_service
        .list(&user, workspace_id, &page)
        .await?;

    Ok(Json(logs.map(Into::into)))
}
