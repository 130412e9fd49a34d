//! Project repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use taskhub_core::error::{AppError, ErrorKind};
use taskhub_core::result::AppResult;
use taskhub_entity::project::{NewProject, Project};

/// Repository for projects.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new project.
    pub async fn create(&self, data: &NewProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (workspace_id, name, description) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.workspace_id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create project", e))
    }

    /// Find a project by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find project", e))
    }

    /// List a workspace's projects, newest first.
    pub async fn list_by_workspace(&self, workspace_id: Uuid) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE workspace_id = $1 ORDER BY created_at DESC",
        )
        .bind(workspace_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }
}
