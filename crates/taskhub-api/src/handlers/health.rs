//! Health check handler.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use taskhub_core::traits::cache::CacheProvider;

use crate::state::AppState;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: `ok` or `degraded`.
    pub status: &'static str,
    /// Whether the database answered.
    pub database: bool,
    /// Whether the cache answered.
    pub cache: bool,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .is_ok();

    let cache = state.cache.health_check().await.unwrap_or(false);

    let status = if database && cache { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        database,
        cache,
    })
}
