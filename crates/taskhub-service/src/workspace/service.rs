//! Workspace creation and membership queries.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use taskhub_auth::WorkspaceAuthorizer;
use taskhub_core::result::AppResult;
use taskhub_database::repositories::workspace::WorkspaceRepository;
use taskhub_entity::user::User;
use taskhub_entity::workspace::{Workspace, WorkspaceMembership};

use crate::audit::AuditService;

/// Manages workspaces and their membership rows.
#[derive(Debug, Clone)]
pub struct WorkspaceService {
    /// Workspace persistence.
    workspaces: Arc<WorkspaceRepository>,
    /// RBAC checks.
    authorizer: Arc<WorkspaceAuthorizer>,
    /// Audit trail.
    audit: Arc<AuditService>,
}

impl WorkspaceService {
    /// Creates a new workspace service.
    pub fn new(
        workspaces: Arc<WorkspaceRepository>,
        authorizer: Arc<WorkspaceAuthorizer>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            workspaces,
            authorizer,
            audit,
        }
    }

    /// Creates a workspace; the creator becomes its Owner member.
    pub async fn create(&self, actor: &User, name: &str) -> AppResult<Workspace> {
        let (workspace, _membership) = self.workspaces.create_with_owner(name, actor.id).await?;

        info!(workspace_id = %workspace.id, owner_id = %actor.id, "Workspace created");

        self.audit
            .record(
                workspace.id,
                actor.id,
                "WORKSPACE_CREATE",
                "workspace",
                Some(workspace.id),
                Some(serde_json::json!({ "name": workspace.name })),
            )
            .await;

        Ok(workspace)
    }

    /// Lists the workspaces the caller belongs to.
    pub async fn list_for_user(&self, actor: &User) -> AppResult<Vec<Workspace>> {
        self.workspaces.list_for_user(actor.id).await
    }

    /// Lists a workspace's members. Requires any membership.
    pub async fn list_members(
        &self,
        actor: &User,
        workspace_id: Uuid,
    ) -> AppResult<Vec<WorkspaceMembership>> {
        self.authorizer.require_member(workspace_id, actor.id).await?;
        self.workspaces.list_members(workspace_id).await
    }

    /// Returns the caller's own membership row. Requires any membership.
    pub async fn membership_of(
        &self,
        actor: &User,
        workspace_id: Uuid,
    ) -> AppResult<WorkspaceMembership> {
        self.authorizer.require_member(workspace_id, actor.id).await
    }
}
