//! Workspace membership entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::WorkspaceRole;

/// A user's membership in a workspace, carrying the role that drives
/// every authorization decision.
///
/// Unique per (workspace_id, user_id); created on workspace creation
/// (creator becomes Owner) or on invite acceptance (invited role).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkspaceMembership {
    /// Unique membership row identifier.
    pub id: Uuid,
    /// The workspace this membership belongs to.
    pub workspace_id: Uuid,
    /// The member.
    pub user_id: Uuid,
    /// Role held in the workspace.
    pub role: WorkspaceRole,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
}
