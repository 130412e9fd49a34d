//! Filter and ordering parameters for task listings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::TaskStatus;

/// Sort direction for task listings (by creation order).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Optional filters applied to a task listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Only tasks in this workflow state.
    pub status: Option<TaskStatus>,
    /// Only tasks assigned to this user.
    pub assignee_id: Option<Uuid>,
    /// Sort direction.
    #[serde(default)]
    pub order: SortOrder,
}
