//! Audit log service.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use taskhub_auth::WorkspaceAuthorizer;
use taskhub_core::result::AppResult;
use taskhub_core::types::pagination::{PageRequest, PageResponse};
use taskhub_database::repositories::audit::AuditLogRepository;
use taskhub_entity::audit::{AuditLog, NewAuditLog};
use taskhub_entity::user::User;
use taskhub_entity::workspace::WorkspaceRole;

/// Records significant write operations and serves the per-workspace log.
#[derive(Debug, Clone)]
pub struct AuditService {
    /// Audit log persistence.
    repo: Arc<AuditLogRepository>,
    /// RBAC checks for the query side.
    authorizer: Arc<WorkspaceAuthorizer>,
}

impl AuditService {
    /// Creates a new audit service.
    pub fn new(repo: Arc<AuditLogRepository>, authorizer: Arc<WorkspaceAuthorizer>) -> Self {
        Self { repo, authorizer }
    }

    /// Appends an audit entry, fire-and-forget.
    ///
    /// The append must never fail the operation being audited; a write
    /// error is logged and swallowed.
    pub async fn record(
        &self,
        workspace_id: Uuid,
        actor_id: Uuid,
        action: &str,
        entity_type: &str,
        entity_id: Option<Uuid>,
        meta: Option<serde_json::Value>,
    ) {
        let entry = NewAuditLog {
            workspace_id,
            actor_id,
            action: action.to_string(),
            entity_type: entity_type.to_string(),
            entity_id,
            meta,
        };

        if let Err(e) = self.repo.insert(&entry).await {
            warn!(
                workspace_id = %workspace_id,
                action = %action,
                error = %e,
                "Failed to write audit log entry"
            );
        }
    }

    /// Lists a workspace's audit log. Requires Admin or above.
    pub async fn list(
        &self,
        actor: &User,
        workspace_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AuditLog>> {
        self.authorizer
            .require(workspace_id, actor.id, WorkspaceRole::Admin)
            .await?;

        self.repo.list_by_workspace(workspace_id, page).await
    }
}
