//! Task entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::TaskStatus;

/// A task inside a project, indirectly scoped to the project's workspace.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Short title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Workflow state.
    pub status: TaskStatus,
    /// Priority; higher numbers sort first.
    pub priority: i32,
    /// Assigned user, if any.
    pub assignee_id: Option<Uuid>,
    /// Due date, if any.
    pub due_date: Option<NaiveDate>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    /// Owning project.
    pub project_id: Uuid,
    /// Short title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Priority; defaults to 0.
    pub priority: i32,
    /// Assigned user, if any.
    pub assignee_id: Option<Uuid>,
    /// Due date, if any.
    pub due_date: Option<NaiveDate>,
}

/// Partial update of a task. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
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
