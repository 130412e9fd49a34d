//! Workspace and membership repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use taskhub_core::error::{AppError, ErrorKind};
use taskhub_core::result::AppResult;
use taskhub_entity::workspace::{Workspace, WorkspaceMembership, WorkspaceRole};

/// Repository for workspaces and their membership rows.
#[derive(Debug, Clone)]
pub struct WorkspaceRepository {
    pool: PgPool,
}

impl WorkspaceRepository {
    /// Create a new workspace repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a workspace and its Owner membership in one transaction.
    pub async fn create_with_owner(
        &self,
        name: &str,
        owner_id: Uuid,
    ) -> AppResult<(Workspace, WorkspaceMembership)> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let workspace = sqlx::query_as::<_, Workspace>(
            "INSERT INTO workspaces (name, owner_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(owner_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create workspace", e))?;

        let membership = sqlx::query_as::<_, WorkspaceMembership>(
            "INSERT INTO workspace_members (workspace_id, user_id, role) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(workspace.id)
        .bind(owner_id)
        .bind(WorkspaceRole::Owner)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create owner membership", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok((workspace, membership))
    }

    /// Find the membership row for (workspace, user).
    pub async fn find_membership(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<WorkspaceMembership>> {
        sqlx::query_as::<_, WorkspaceMembership>(
            "SELECT * FROM workspace_members WHERE workspace_id = $1 AND user_id = $2",
        )
        .bind(workspace_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find membership", e))
    }

    /// Add a member to a workspace.
    ///
    /// A duplicate (workspace, user) pair surfaces as a Conflict.
    pub async fn add_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        role: WorkspaceRole,
    ) -> AppResult<WorkspaceMembership> {
        sqlx::query_as::<_, WorkspaceMembership>(
            "INSERT INTO workspace_members (workspace_id, user_id, role) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(workspace_id)
        .bind(user_id)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("uq_workspace_user") =>
            {
                AppError::conflict("User is already a member of this workspace")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to add member", e),
        })
    }

    /// List the workspaces a user belongs to, newest first.
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Workspace>> {
        sqlx::query_as::<_, Workspace>(
            "SELECT w.* FROM workspaces w \
             JOIN workspace_members m ON m.workspace_id = w.id \
             WHERE m.user_id = $1 \
             ORDER BY w.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list user workspaces", e)
        })
    }

    /// List all members of a workspace.
    pub async fn list_members(&self, workspace_id: Uuid) -> AppResult<Vec<WorkspaceMembership>> {
        sqlx::query_as::<_, WorkspaceMembership>(
            "SELECT * FROM workspace_members WHERE workspace_id = $1 ORDER BY created_at ASC",
        )
        .bind(workspace_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list members", e))
    }
}
