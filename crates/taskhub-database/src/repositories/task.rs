//! Task repository implementation, including the dashboard aggregation.

use sqlx::PgPool;
use uuid::Uuid;

use taskhub_core::error::{AppError, ErrorKind};
use taskhub_core::result::AppResult;
use taskhub_core::types::pagination::{PageRequest, PageResponse};
use taskhub_entity::task::{NewTask, Task, TaskFilter, UpdateTask};

/// Aggregated task counts for a workspace dashboard.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaskCounts {
    /// Total tasks across the workspace.
    pub total: i64,
    /// Tasks in `todo`.
    pub todo: i64,
    /// Tasks in `doing`.
    pub doing: i64,
    /// Tasks in `done`.
    pub done: i64,
    /// Tasks in `blocked`.
    pub blocked: i64,
    /// Tasks past their due date and not done.
    pub overdue: i64,
}

/// Repository for tasks.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    /// Create a new task repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new task.
    pub async fn create(&self, data: &NewTask) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (project_id, title, description, priority, assignee_id, due_date) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.project_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.priority)
        .bind(data.assignee_id)
        .bind(data.due_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create task", e))
    }

    /// Find a task by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find task", e))
    }

    /// Apply a partial update; absent fields keep their current value.
    pub async fn update(&self, id: Uuid, data: &UpdateTask) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET description = COALESCE($2, description), \
                              status = COALESCE($3, status), \
                              priority = COALESCE($4, priority), \
                              assignee_id = COALESCE($5, assignee_id), \
                              due_date = COALESCE($6, due_date), \
                              updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.description)
        .bind(data.status)
        .bind(data.priority)
        .bind(data.assignee_id)
        .bind(data.due_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update task", e))?
        .ok_or_else(|| AppError::not_found("Task not found"))
    }

    /// List a project's tasks with optional filters and pagination.
    pub async fn list_by_project(
        &self,
        project_id: Uuid,
        filter: &TaskFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Task>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tasks \
             WHERE project_id = $1 \
               AND ($2::task_status IS NULL OR status = $2) \
               AND ($3::uuid IS NULL OR assignee_id = $3)",
        )
        .bind(project_id)
        .bind(filter.status)
        .bind(filter.assignee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tasks", e))?;

        // Sort direction comes from an enum, never from raw user input.
        let query = format!(
            "SELECT * FROM tasks \
             WHERE project_id = $1 \
               AND ($2::task_status IS NULL OR status = $2) \
               AND ($3::uuid IS NULL OR assignee_id = $3) \
             ORDER BY created_at {} \
             LIMIT $4 OFFSET $5",
            filter.order.as_sql()
        );

        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(filter.status)
            .bind(filter.assignee_id)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tasks", e))?;

        Ok(PageResponse::new(
            tasks,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Aggregate task counts for every project in a workspace.
    pub async fn workspace_counts(&self, workspace_id: Uuid) -> AppResult<TaskCounts> {
        sqlx::query_as::<_, TaskCounts>(
            "SELECT COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE t.status = 'todo') AS todo, \
                    COUNT(*) FILTER (WHERE t.status = 'doing') AS doing, \
                    COUNT(*) FILTER (WHERE t.status = 'done') AS done, \
                    COUNT(*) FILTER (WHERE t.status = 'blocked') AS blocked, \
                    COUNT(*) FILTER (WHERE t.due_date IS NOT NULL \
                                       AND t.due_date < CURRENT_DATE \
                                       AND t.status <> 'done') AS overdue \
             FROM tasks t \
             JOIN projects p ON p.id = t.project_id \
             WHERE p.workspace_id = $1",
        )
        .bind(workspace_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to aggregate task counts", e)
        })
    }
}
