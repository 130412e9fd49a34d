//! # taskhub-service
//!
//! Application services sitting between the HTTP layer and the
//! repositories. Every protected operation declares its own minimum role
//! and goes through the workspace authorizer before touching data.

pub mod audit;
pub mod dashboard;
pub mod project;
pub mod task;
pub mod workspace;

pub use audit::AuditService;
pub use dashboard::DashboardService;
pub use project::ProjectService;
pub use task::TaskService;
pub use workspace::{InviteService, WorkspaceService};
