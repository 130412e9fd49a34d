//! Request DTOs with input validation.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use taskhub_entity::task::{SortOrder, TaskStatus};
use taskhub_entity::workspace::WorkspaceRole;

/// POST /api/auth/register
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Plaintext password; hashed before storage.
    pub password: String,
    /// Display name.
    pub name: Option<String>,
}

/// POST /api/auth/login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// POST /api/auth/refresh and /api/auth/logout
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    /// The refresh token being rotated or revoked.
    pub refresh_token: String,
}

/// POST /api/workspaces
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkspaceRequest {
    /// Workspace name.
    #[validate(length(min = 1, max = 120))]
    pub name: String,
}

/// POST /api/workspaces/{id}/invites
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInviteRequest {
    /// Invitee email.
    #[validate(email)]
    pub email: String,
    /// Role granted on acceptance.
    #[serde(default = "default_invite_role")]
    pub role: WorkspaceRole,
}

/// POST /api/invites/accept
#[derive(Debug, Deserialize)]
pub struct AcceptInviteRequest {
    /// The invite's acceptance token.
    pub token: String,
}

/// POST /api/workspaces/{id}/projects
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Project name.
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
}

/// POST /api/projects/{id}/tasks
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Priority; higher sorts first.
    #[serde(default)]
    pub priority: i32,
    /// Assigned user.
    pub assignee_id: Option<Uuid>,
    /// Due date.
    pub due_date: Option<NaiveDate>,
}

/// PATCH /api/tasks/{id}
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    /// New description.
    pub description: Option<String>,
    /// New workflow state.
    pub status: Option<TaskStatus>,
    /// New priority.
    pub priority: Option<i32>,
    /// New assignee.
    pub assignee_id: Option<Uuid>,
    /// New due date.
    pub due_date: Option<NaiveDate>,
}

/// Query parameters for GET /api/projects/{id}/tasks
#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    /// Only tasks in this workflow state.
    pub status: Option<TaskStatus>,
    /// Only tasks assigned to this user.
    pub assignee_id: Option<Uuid>,
    /// Sort direction by creation order.
    #[serde(default)]
    pub order: SortOrder,
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_invite_role() -> WorkspaceRole {
    WorkspaceRole::Member
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    25
}
