//! # taskhub-entity
//!
//! Domain entity models for Taskhub: users, workspaces, memberships,
//! invites, projects, tasks, and audit log entries.
//!
//! All entities are plain data structs deriving `sqlx::FromRow` for
//! repository queries and `serde` traits for caching and DTO mapping.

pub mod audit;
pub mod project;
pub mod task;
pub mod user;
pub mod workspace;

pub use audit::AuditLog;
pub use project::Project;
pub use task::{Task, TaskStatus};
pub use user::User;
pub use workspace::{Invite, InviteStatus, Workspace, WorkspaceMembership, WorkspaceRole};
