//! Audit log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A record of a significant write operation inside a workspace:
/// who did what, to which entity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLog {
    /// Unique log entry identifier.
    pub id: Uuid,
    /// The workspace the action happened in.
    pub workspace_id: Uuid,
    /// The user who performed the action.
    pub actor_id: Uuid,
    /// Action name, e.g. `WORKSPACE_CREATE`, `TASK_UPDATE`.
    pub action: String,
    /// Entity type the action targeted, e.g. `invite`, `task`.
    pub entity_type: String,
    /// Targeted entity id, when applicable.
    pub entity_id: Option<Uuid>,
    /// Extra context (old/new status, invited email, etc.).
    pub meta: Option<serde_json::Value>,
    /// When the action happened.
    pub created_at: DateTime<Utc>,
}

/// Data required to append an audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuditLog {
    /// The workspace the action happened in.
    pub workspace_id: Uuid,
    /// The user who performed the action.
    pub actor_id: Uuid,
    /// Action name.
    pub action: String,
    /// Entity type the action targeted.
    pub entity_type: String,
    /// Targeted entity id, when applicable.
    pub entity_id: Option<Uuid>,
    /// Extra context.
    pub meta: Option<serde_json::Value>,
}
