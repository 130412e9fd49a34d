//! Task entity, status enum, and listing filters.

pub mod filter;
pub mod model;
pub mod status;

pub use filter::{SortOrder, TaskFilter};
pub use model::{NewTask, Task, UpdateTask};
pub use status::TaskStatus;
