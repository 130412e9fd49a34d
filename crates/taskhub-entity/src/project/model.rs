//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A project inside a workspace. Every project belongs to exactly one
/// workspace; tenant isolation for tasks goes through this link.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Owning workspace.
    pub workspace_id: Uuid,
    /// Project name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    /// Owning workspace.
    pub workspace_id: Uuid,
    /// Project name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
}
