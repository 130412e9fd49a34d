//! Project creation and listing with workspace isolation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use taskhub_auth::WorkspaceAuthorizer;
use taskhub_core::error::AppError;
use taskhub_core::result::AppResult;
use taskhub_database::repositories::project::ProjectRepository;
use taskhub_entity::project::{NewProject, Project};
use taskhub_entity::user::User;
use taskhub_entity::workspace::{WorkspaceMembership, WorkspaceRole};

use crate::audit::AuditService;

/// Manages projects inside workspaces.
#[derive(Debug, Clone)]
pub struct ProjectService {
    /// Project persistence.
    projects: Arc<ProjectRepository>,
    /// RBAC checks.
    authorizer: Arc<WorkspaceAuthorizer>,
    /// Audit trail.
    audit: Arc<AuditService>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(
        projects: Arc<ProjectRepository>,
        authorizer: Arc<WorkspaceAuthorizer>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            projects,
            authorizer,
            audit,
        }
    }

    /// Creates a project. Requires Member or above.
    pub async fn create(
        &self,
        actor: &User,
        workspace_id: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<Project> {
        self.authorizer
            .require(workspace_id, actor.id, WorkspaceRole::Member)
            .await?;

        let project = self
            .projects
            .create(&NewProject {
                workspace_id,
                name: name.to_string(),
                description: description.map(String::from),
            })
            .await?;

        info!(project_id = %project.id, workspace_id = %workspace_id, "Project created");

        self.audit
            .record(
                workspace_id,
                actor.id,
                "PROJECT_CREATE",
                "project",
                Some(project.id),
                Some(serde_json::json!({ "name": project.name })),
            )
            .await;

        Ok(project)
    }

    /// Lists a workspace's projects. Requires any membership.
    pub async fn list(&self, actor: &User, workspace_id: Uuid) -> AppResult<Vec<Project>> {
        self.authorizer.require_member(workspace_id, actor.id).await?;
        self.projects.list_by_workspace(workspace_id).await
    }

    /// Loads a project and enforces the caller's role in its workspace.
    ///
    /// A missing project is NotFound; the role check on the owning
    /// workspace is how task operations inherit tenant isolation.
    pub async fn require_project(
        &self,
        actor: &User,
        project_id: Uuid,
        min_role: WorkspaceRole,
    ) -> AppResult<(Project, WorkspaceMembership)> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        let membership = self
            .authorizer
            .require(project.workspace_id, actor.id, min_role)
            .await?;

        Ok((project, membership))
    }
}
