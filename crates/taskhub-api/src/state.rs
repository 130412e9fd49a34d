//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use taskhub_auth::identity::IdentityResolver;
use taskhub_auth::jwt::{JwtDecoder, JwtEncoder};
use taskhub_auth::ledger::RefreshTokenLedger;
use taskhub_auth::password::{PasswordHasher, PasswordValidator};
use taskhub_auth::rbac::WorkspaceAuthorizer;
use taskhub_auth::session::SessionManager;
use taskhub_cache::provider::CacheManager;
use taskhub_core::config::AppConfig;

use taskhub_database::repositories::audit::AuditLogRepository;
use taskhub_database::repositories::invite::InviteRepository;
use taskhub_database::repositories::project::ProjectRepository;
use taskhub_database::repositories::task::TaskRepository;
use taskhub_database::repositories::user::UserRepository;
use taskhub_database::repositories::workspace::WorkspaceRepository;

use taskhub_service::audit::AuditService;
use taskhub_service::dashboard::DashboardService;
use taskhub_service::project::ProjectService;
use taskhub_service::task::TaskService;
use taskhub_service::workspace::{InviteService, WorkspaceService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,

    // ── Auth core ────────────────────────────────────────────
    /// Session lifecycle manager (register, login, refresh, logout)
    pub session_manager: Arc<SessionManager>,
    /// Access token → user resolution
    pub identity_resolver: Arc<IdentityResolver>,
    /// Workspace RBAC checks
    pub authorizer: Arc<WorkspaceAuthorizer>,

    // ── Services ─────────────────────────────────────────────
    /// Workspace service
    pub workspace_service: Arc<WorkspaceService>,
    /// Invite service
    pub invite_service: Arc<InviteService>,
    /// Project service
    pub project_service: Arc<ProjectService>,
    /// Task service
    pub task_service: Arc<TaskService>,
    /// Dashboard service
    pub dashboard_service: Arc<DashboardService>,
    /// Audit log service
    pub audit_service: Arc<AuditService>,
}

impl AppState {
    /// Wires every repository, auth component, and service together.
    ///
    /// Shared by the server binary and the integration test harness so
    /// both construct the exact same object graph.
    pub fn assemble(config: Arc<AppConfig>, db_pool: PgPool, cache: Arc<CacheManager>) -> Self {
        // Repositories
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let workspace_repo = Arc::new(WorkspaceRepository::new(db_pool.clone()));
        let invite_repo = Arc::new(InviteRepository::new(db_pool.clone()));
        let project_repo = Arc::new(ProjectRepository::new(db_pool.clone()));
        let task_repo = Arc::new(TaskRepository::new(db_pool.clone()));
        let audit_repo = Arc::new(AuditLogRepository::new(db_pool.clone()));

        // Auth core
        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let decoder = Arc::new(JwtDecoder::new(&config.auth));
        let ledger = Arc::new(RefreshTokenLedger::new(cache.clone()));
        let hasher = Arc::new(PasswordHasher::new());
        let session_manager = Arc::new(SessionManager::new(
            encoder,
            decoder.clone(),
            ledger,
            user_repo.clone(),
            hasher,
            PasswordValidator::new(&config.auth),
        ));
        let identity_resolver = Arc::new(IdentityResolver::new(decoder, user_repo));
        let authorizer = Arc::new(WorkspaceAuthorizer::new(workspace_repo.clone()));

        // Services
        let audit_service = Arc::new(AuditService::new(audit_repo, authorizer.clone()));
        let workspace_service = Arc::new(WorkspaceService::new(
            workspace_repo.clone(),
            authorizer.clone(),
            audit_service.clone(),
        ));
        let invite_service = Arc::new(InviteService::new(
            invite_repo,
            workspace_repo,
            authorizer.clone(),
            audit_service.clone(),
            &config.auth,
        ));
        let project_service = Arc::new(ProjectService::new(
            project_repo,
            authorizer.clone(),
            audit_service.clone(),
        ));
        let task_service = Arc::new(TaskService::new(
            task_repo.clone(),
            project_service.clone(),
            cache.clone(),
            audit_service.clone(),
        ));
        let dashboard_service = Arc::new(DashboardService::new(
            task_repo,
            authorizer.clone(),
            cache.clone(),
            &config.cache,
        ));

        Self {
            config,
            db_pool,
            cache,
            session_manager,
            identity_resolver,
            authorizer,
            workspace_service,
            invite_service,
            project_service,
            task_service,
            dashboard_service,
            audit_service,
        }
    }
}
