//! Workspace dashboard service.

pub mod service;

pub use service::{DashboardService, DashboardSummary, StatusBreakdown};
