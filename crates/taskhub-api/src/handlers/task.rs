//! Task handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use taskhub_core::error::AppError;
use taskhub_core::types::pagination::{PageRequest, PageResponse};
use taskhub_entity::task::{NewTask, TaskFilter, UpdateTask};

use crate::dto::request::{CreateTaskRequest, TaskListQuery, UpdateTaskRequest};
use crate::dto::response::TaskResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/projects/{id}/tasks (Member or above)
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let task = state
        .task_service
        .create(
            &user,
            NewTask {
                project_id,
                title: req.title,
                description: req.description,
                priority: req.priority,
                assignee_id: req.assignee_id,
                due_date: req.due_date,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// GET /api/projects/{id}/tasks (filters, pagination, ordering)
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(project_id): Path<Uuid>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<PageResponse<TaskResponse>>, ApiError> {
    let filter = TaskFilter {
        status: query.status,
        assignee_id: query.assignee_id,
        order: query.order,
    };
    let page = PageRequest::new(query.page, query.page_size);

    let tasks = state
        .task_service
        .list(&user, project_id, &filter, &page)
        .await?;

    Ok(Json(tasks.map(Into::into)))
}

/// PATCH /api/tasks/{id} (Member or above)
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state
        .task_service
        .update(
            &user,
            task_id,
            UpdateTask {
                description: req.description,
                status: req.status,
                priority: req.priority,
                assignee_id: req.assignee_id,
                due_date: req.due_date,
            },
        )
        .await?;

    Ok(Json(task.into()))
}
