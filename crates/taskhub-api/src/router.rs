//! Route definitions for the Taskhub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, patch, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(workspace_routes())
        .merge(project_routes())
        .merge(task_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&state))
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// User self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/me", get(handlers::user::me))
}

/// Workspace, membership, invite, dashboard, and audit endpoints
fn workspace_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workspaces",
            post(handlers::workspace::create).get(handlers::workspace::list_mine),
        )
        .route(
            "/workspaces/{workspace_id}/members",
            get(handlers::workspace::list_members),
        )
        .route(
            "/workspaces/{workspace_id}/me",
            get(handlers::workspace::membership),
        )
        .route(
            "/workspaces/{workspace_id}/invites",
            post(handlers::invite::create),
        )
        .route("/invites/accept", post(handlers::invite::accept))
        .route(
            "/workspaces/{workspace_id}/dashboard",
            get(handlers::dashboard::summary),
        )
        .route(
            "/workspaces/{workspace_id}/audit-logs",
            get(handlers::audit::list),
        )
}

/// Project endpoints
fn project_routes() -> Router<AppState> {
    Router::new().route(
        "/workspaces/{workspace_id}/projects",
        post(handlers::project::create).get(handlers::project::list),
    )
}

/// Task endpoints
fn task_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/{project_id}/tasks",
            post(handlers::task::create).get(handlers::task::list),
        )
        .route("/tasks/{task_id}", patch(handlers::task::update))
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    if cors_config.allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
