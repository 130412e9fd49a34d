//! Invite creation and acceptance.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use taskhub_auth::WorkspaceAuthorizer;
use taskhub_core::config::auth::AuthConfig;
use taskhub_core::error::AppError;
use taskhub_core::result::AppResult;
use taskhub_database::repositories::invite::InviteRepository;
use taskhub_database::repositories::workspace::WorkspaceRepository;
use taskhub_entity::user::User;
use taskhub_entity::workspace::{
    Invite, InviteStatus, NewInvite, WorkspaceMembership, WorkspaceRole,
};

use crate::audit::AuditService;

/// Number of random bytes in an invite token (192 bits).
const INVITE_TOKEN_BYTES: usize = 24;

/// Manages the invite lifecycle: Pending → Accepted | Expired | Revoked.
#[derive(Debug, Clone)]
pub struct InviteService {
    /// Invite persistence.
    invites: Arc<InviteRepository>,
    /// Membership persistence.
    workspaces: Arc<WorkspaceRepository>,
    /// RBAC checks.
    authorizer: Arc<WorkspaceAuthorizer>,
    /// Audit trail.
    audit: Arc<AuditService>,
    /// Invite expiry in days.
    invite_ttl_days: i64,
}

impl InviteService {
    /// Creates a new invite service.
    pub fn new(
        invites: Arc<InviteRepository>,
        workspaces: Arc<WorkspaceRepository>,
        authorizer: Arc<WorkspaceAuthorizer>,
        audit: Arc<AuditService>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            invites,
            workspaces,
            authorizer,
            audit,
            invite_ttl_days: config.invite_ttl_days as i64,
        }
    }

    /// Creates an invite for an email address. Requires Admin or above.
    pub async fn create(
        &self,
        actor: &User,
        workspace_id: Uuid,
        email: &str,
        role: WorkspaceRole,
    ) -> AppResult<Invite> {
        self.authorizer
            .require(workspace_id, actor.id, WorkspaceRole::Admin)
            .await?;

        let invite = self
            .invites
            .create(&NewInvite {
                workspace_id,
                email: email.to_string(),
                token: generate_invite_token(),
                role,
                expires_at: Utc::now() + chrono::Duration::days(self.invite_ttl_days),
            })
            .await?;

        info!(invite_id = %invite.id, workspace_id = %workspace_id, "Invite created");

        self.audit
            .record(
                workspace_id,
                actor.id,
                "INVITE_CREATE",
                "invite",
                Some(invite.id),
                Some(serde_json::json!({ "email": invite.email, "role": invite.role })),
            )
            .await;

        Ok(invite)
    }

    /// Accepts an invite on behalf of the logged-in user.
    ///
    /// The invite must be pending and unexpired, and the caller's email
    /// must match the invited address. An already-member caller keeps
    /// their existing role; the invite is still marked accepted.
    pub async fn accept(
        &self,
        actor: &User,
        token: &str,
    ) -> AppResult<(Invite, WorkspaceMembership)> {
        let invite = self
            .invites
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Invite not found"))?;

        if !invite.status.is_pending() {
            return Err(AppError::validation(format!(
                "Invite is not pending: {}",
                invite.status
            )));
        }

        let now = Utc::now();
        if invite.is_expired_at(now) {
            self.invites
                .set_status(invite.id, InviteStatus::Expired)
                .await?;
            return Err(AppError::validation("Invite has expired"));
        }

        if !actor.email.eq_ignore_ascii_case(&invite.email) {
            return Err(AppError::forbidden("Invite email mismatch"));
        }

        let membership = match self
            .workspaces
            .find_membership(invite.workspace_id, actor.id)
            .await?
        {
            Some(existing) => existing,
            None => {
                self.workspaces
                    .add_member(invite.workspace_id, actor.id, invite.role)
                    .await?
            }
        };

        let invite = self
            .invites
            .set_status(invite.id, InviteStatus::Accepted)
            .await?;

        info!(
            invite_id = %invite.id,
            workspace_id = %invite.workspace_id,
            user_id = %actor.id,
            "Invite accepted"
        );

        self.audit
            .record(
                invite.workspace_id,
                actor.id,
                "INVITE_ACCEPT",
                "invite",
                Some(invite.id),
                Some(serde_json::json!({ "email": invite.email })),
            )
            .await;

        Ok((invite, membership))
    }
}

/// Generates an unguessable url-safe invite token.
fn generate_invite_token() -> String {
    let mut bytes = [0u8; INVITE_TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_tokens_are_unique_and_urlsafe() {
        let a = generate_invite_token();
        let b = generate_invite_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32); // 24 bytes, base64 no-pad
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
