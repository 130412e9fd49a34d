//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use taskhub_auth::jwt::TokenPair;
use taskhub_entity::audit::AuditLog;
use taskhub_entity::project::Project;
use taskhub_entity::task::{Task, TaskStatus};
use taskhub_entity::user::User;
use taskhub_entity::workspace::{Invite, InviteStatus, Workspace, WorkspaceMembership, WorkspaceRole};

/// Token pair returned by register, login, and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Always `bearer`.
    pub token_type: String,
    /// Access token expiry.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiry.
    pub refresh_expires_at: DateTime<Utc>,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "bearer".to_string(),
            access_expires_at: pair.access_expires_at,
            refresh_expires_at: pair.refresh_expires_at,
        }
    }
}

/// Public user profile. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: Option<String>,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

/// Workspace representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceResponse {
    /// Workspace id.
    pub id: Uuid,
    /// Workspace name.
    pub name: String,
    /// Creator (display only).
    pub owner_id: Uuid,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Workspace> for WorkspaceResponse {
    fn from(ws: Workspace) -> Self {
        Self {
            id: ws.id,
            name: ws.name,
            owner_id: ws.owner_id,
            created_at: ws.created_at,
        }
    }
}

/// A workspace member row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    /// The workspace.
    pub workspace_id: Uuid,
    /// The member.
    pub user_id: Uuid,
    /// Held role.
    pub role: WorkspaceRole,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
}

impl From<WorkspaceMembership> for MemberResponse {
    fn from(m: WorkspaceMembership) -> Self {
        Self {
            workspace_id: m.workspace_id,
            user_id: m.user_id,
            role: m.role,
            created_at: m.created_at,
        }
    }
}

/// Invite representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteResponse {
    /// Invite id.
    pub id: Uuid,
    /// Target workspace.
    pub workspace_id: Uuid,
    /// Invitee email.
    pub email: String,
    /// Acceptance token.
    pub token: String,
    /// Role granted on acceptance.
    pub role: WorkspaceRole,
    /// Lifecycle state.
    pub status: InviteStatus,
    /// Expiry time.
    pub expires_at: DateTime<Utc>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Invite> for InviteResponse {
    fn from(invite: Invite) -> Self {
        Self {
            id: invite.id,
            workspace_id: invite.workspace_id,
            email: invite.email,
            token: invite.token,
            role: invite.role,
            status: invite.status,
            expires_at: invite.expires_at,
            created_at: invite.created_at,
        }
    }
}

/// Result of accepting an invite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptInviteResponse {
    /// The workspace joined.
    pub workspace_id: Uuid,
    /// The role now held.
    pub role: WorkspaceRole,
}

/// Project representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    /// Project id.
    pub id: Uuid,
    /// Owning workspace.
    pub workspace_id: Uuid,
    /// Project name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            workspace_id: p.workspace_id,
            name: p.name,
            description: p.description,
            created_at: p.created_at,
        }
    }
}

/// Task representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task id.
    pub id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Workflow state.
    pub status: TaskStatus,
    /// Priority.
    pub priority: i32,
    /// Assignee.
    pub assignee_id: Option<Uuid>,
    /// Due date.
    pub due_date: Option<NaiveDate>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            project_id: t.project_id,
            title: t.title,
            description: t.description,
            status: t.status,
            priority: t.priority,
            assignee_id: t.assignee_id,
            due_date: t.due_date,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Audit log entry representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogResponse {
    /// Entry id.
    pub id: Uuid,
    /// The workspace the action happened in.
    pub workspace_id: Uuid,
    /// The acting user.
    pub actor_id: Uuid,
    /// Action name.
    pub action: String,
    /// Targeted entity type.
    pub entity_type: String,
    /// Targeted entity id.
    pub entity_id: Option<Uuid>,
    /// Extra context.
    pub meta: Option<serde_json::Value>,
    /// When the action happened.
    pub created_at: DateTime<Utc>,
}

impl From<AuditLog> for AuditLogResponse {
    fn from(log: AuditLog) -> Self {
        Self {
            id: log.id,
            workspace_id: log.workspace_id,
            actor_id: log.actor_id,
            action: log.action,
            entity_type: log.entity_type,
            entity_id: log.entity_id,
            meta: log.meta,
            created_at: log.created_at,
        }
    }
}

/// Simple message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}
