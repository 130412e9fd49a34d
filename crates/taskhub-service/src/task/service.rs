//! Task CRUD with workspace isolation and dashboard cache invalidation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use taskhub_cache::keys;
use taskhub_cache::provider::CacheManager;
use taskhub_core::error::AppError;
use taskhub_core::result::AppResult;
use taskhub_core::traits::cache::CacheProvider;
use taskhub_core::types::pagination::{PageRequest, PageResponse};
use taskhub_database::repositories::task::TaskRepository;
use taskhub_entity::task::{NewTask, Task, TaskFilter, UpdateTask};
use taskhub_entity::user::User;
use taskhub_entity::workspace::WorkspaceRole;

use crate::audit::AuditService;
use crate::project::ProjectService;

/// Manages tasks. All access goes through the owning project's workspace.
#[derive(Debug, Clone)]
pub struct TaskService {
    /// Task persistence.
    tasks: Arc<TaskRepository>,
    /// Project lookup + isolation checks.
    projects: Arc<ProjectService>,
    /// Dashboard cache invalidation.
    cache: Arc<CacheManager>,
    /// Audit trail.
    audit: Arc<AuditService>,
}

impl TaskService {
    /// Creates a new task service.
    pub fn new(
        tasks: Arc<TaskRepository>,
        projects: Arc<ProjectService>,
        cache: Arc<CacheManager>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            tasks,
            projects,
            cache,
            audit,
        }
    }

    /// Creates a task in a project. Requires Member or above.
    pub async fn create(&self, actor: &User, data: NewTask) -> AppResult<Task> {
        let (project, _membership) = self
            .projects
            .require_project(actor, data.project_id, WorkspaceRole::Member)
            .await?;

        let task = self.tasks.create(&data).await?;

        info!(task_id = %task.id, project_id = %project.id, "Task created");

        self.invalidate_dashboard(project.workspace_id).await;
        self.audit
            .record(
                project.workspace_id,
                actor.id,
                "TASK_CREATE",
                "task",
                Some(task.id),
                Some(serde_json::json!({ "title": task.title })),
            )
            .await;

        Ok(task)
    }

    /// Lists a project's tasks. Requires any membership.
    pub async fn list(
        &self,
        actor: &User,
        project_id: Uuid,
        filter: &TaskFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Task>> {
        self.projects
            .require_project(actor, project_id, WorkspaceRole::Guest)
            .await?;

        self.tasks.list_by_project(project_id, filter, page).await
    }

    /// Applies a partial update. Requires Member or above in the task's
    /// workspace, resolved through task → project.
    pub async fn update(&self, actor: &User, task_id: Uuid, data: UpdateTask) -> AppResult<Task> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))?;

        let (project, _membership) = self
            .projects
            .require_project(actor, task.project_id, WorkspaceRole::Member)
            .await?;

        let old_status = task.status;
        let task = self.tasks.update(task_id, &data).await?;

        info!(task_id = %task.id, project_id = %project.id, "Task updated");

        self.invalidate_dashboard(project.workspace_id).await;
        self.audit
            .record(
                project.workspace_id,
                actor.id,
                "TASK_UPDATE",
                "task",
                Some(task.id),
                Some(serde_json::json!({
                    "old_status": old_status,
                    "new_status": task.status,
                })),
            )
            .await;

        Ok(task)
    }

    /// Drops the workspace's cached dashboard after a task mutation.
    ///
    /// The dashboard is a short-TTL convenience cache; failing to drop it
    /// only delays freshness, so errors are not propagated.
    async fn invalidate_dashboard(&self, workspace_id: Uuid) {
        if let Err(e) = self
            .cache
            .delete(&keys::workspace_dashboard(workspace_id))
            .await
        {
            tracing::warn!(
                workspace_id = %workspace_id,
                error = %e,
                "Failed to invalidate dashboard cache"
            );
        }
    }
}
