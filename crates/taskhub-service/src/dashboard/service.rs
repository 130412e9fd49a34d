//! Read-through cached workspace dashboard aggregation.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use taskhub_auth::WorkspaceAuthorizer;
use taskhub_cache::keys;
use taskhub_cache::provider::CacheManager;
use taskhub_core::config::cache::CacheConfig;
use taskhub_core::result::AppResult;
use taskhub_core::traits::cache::CacheProvider;
use taskhub_database::repositories::task::TaskRepository;
use taskhub_entity::user::User;

/// Task counts by workflow state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBreakdown {
    /// Tasks in `todo`.
    pub todo: i64,
    /// Tasks in `doing`.
    pub doing: i64,
    /// Tasks in `done`.
    pub done: i64,
    /// Tasks in `blocked`.
    pub blocked: i64,
}

/// The dashboard payload for one workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// The workspace the summary describes.
    pub workspace_id: Uuid,
    /// Total tasks across all projects.
    pub tasks_total: i64,
    /// Counts by status.
    pub by_status: StatusBreakdown,
    /// Tasks past their due date and not done.
    pub overdue_count: i64,
    /// Whether this response was served from cache.
    #[serde(default)]
    pub cached: bool,
}

/// Serves the workspace dashboard through a short-TTL cache.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Task aggregation queries.
    tasks: Arc<TaskRepository>,
    /// RBAC checks.
    authorizer: Arc<WorkspaceAuthorizer>,
    /// Summary cache.
    cache: Arc<CacheManager>,
    /// Cache TTL for summaries.
    ttl: Duration,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        tasks: Arc<TaskRepository>,
        authorizer: Arc<WorkspaceAuthorizer>,
        cache: Arc<CacheManager>,
        config: &CacheConfig,
    ) -> Self {
        Self {
            tasks,
            authorizer,
            cache,
            ttl: Duration::from_secs(config.dashboard_ttl_seconds),
        }
    }

    /// Returns the workspace dashboard. Requires any membership.
    ///
    /// Cache first; on a miss, one SQL aggregation fills it.
    pub async fn summary(&self, actor: &User, workspace_id: Uuid) -> AppResult<DashboardSummary> {
        self.authorizer.require_member(workspace_id, actor.id).await?;

        let key = keys::workspace_dashboard(workspace_id);

        if let Some(mut cached) = self.cache.get_json::<DashboardSummary>(&key).await? {
            debug!(workspace_id = %workspace_id, "Dashboard cache hit");
            cached.cached = true;
            return Ok(cached);
        }

        let counts = self.tasks.workspace_counts(workspace_id).await?;
        let summary = DashboardSummary {
            workspace_id,
            tasks_total: counts.total,
            by_status: StatusBreakdown {
                todo: counts.todo,
                doing: counts.doing,
                done: counts.done,
                blocked: counts.blocked,
            },
            overdue_count: counts.overdue,
            cached: false,
        };

        self.cache.set_json(&key, &summary, self.ttl).await?;

        Ok(summary)
    }
}
