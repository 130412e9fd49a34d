//! Audit log repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use taskhub_core::error::{AppError, ErrorKind};
use taskhub_core::result::AppResult;
use taskhub_core::types::pagination::{PageRequest, PageResponse};
use taskhub_entity::audit::{AuditLog, NewAuditLog};

/// Repository for the append-only audit log.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    /// Create a new audit log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a new entry.
    pub async fn insert(&self, data: &NewAuditLog) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO audit_logs (workspace_id, actor_id, action, entity_type, entity_id, meta) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(data.workspace_id)
        .bind(data.actor_id)
        .bind(&data.action)
        .bind(&data.entity_type)
        .bind(data.entity_id)
        .bind(&data.meta)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert audit log", e))?;
        Ok(())
    }

    /// List a workspace's audit log, newest first.
    pub async fn list_by_workspace(
        &self,
        workspace_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AuditLog>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM audit_logs WHERE workspace_id = $1")
                .bind(workspace_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count audit logs", e)
                })?;

        let logs = sqlx::query_as::<_, AuditLog>(
            "SELECT * FROM audit_logs WHERE workspace_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(workspace_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list audit logs", e))?;

        Ok(PageResponse::new(
            logs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
