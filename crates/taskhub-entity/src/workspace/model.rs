//! Workspace entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A workspace — the tenant boundary all projects and tasks live under.
///
/// `owner_id` records the creator for display and attribution only; live
/// authorization is driven entirely by membership rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workspace {
    /// Unique workspace identifier.
    pub id: Uuid,
    /// Workspace name.
    pub name: String,
    /// The user who created the workspace.
    pub owner_id: Uuid,
    /// When the workspace was created.
    pub created_at: DateTime<Utc>,
}
