//! Invite repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use taskhub_core::error::{AppError, ErrorKind};
use taskhub_core::result::AppResult;
use taskhub_entity::workspace::{Invite, InviteStatus, NewInvite};

/// Repository for workspace invites.
#[derive(Debug, Clone)]
pub struct InviteRepository {
    pool: PgPool,
}

impl InviteRepository {
    /// Create a new invite repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new invite.
    pub async fn create(&self, data: &NewInvite) -> AppResult<Invite> {
        sqlx::query_as::<_, Invite>(
            "INSERT INTO invites (workspace_id, email, token, role, expires_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.workspace_id)
        .bind(&data.email)
        .bind(&data.token)
        .bind(data.role)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("invites_token_key") =>
            {
                // Token collision over 192 random bits; retrying is the
                // caller's call, but surfacing Conflict keeps it visible.
                AppError::conflict("Invite token collision")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create invite", e),
        })
    }

    /// Find an invite by its acceptance token.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<Invite>> {
        sqlx::query_as::<_, Invite>("SELECT * FROM invites WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find invite by token", e)
            })
    }

    /// Move an invite to a new lifecycle state.
    pub async fn set_status(&self, id: Uuid, status: InviteStatus) -> AppResult<Invite> {
        sqlx::query_as::<_, Invite>("UPDATE invites SET status = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update invite status", e)
            })?
            .ok_or_else(|| AppError::not_found("Invite not found"))
    }
}
