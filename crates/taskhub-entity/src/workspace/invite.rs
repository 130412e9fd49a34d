//! Workspace invite entity and its status state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::WorkspaceRole;

/// Lifecycle state of an invite.
///
/// The only valid transitions are out of `Pending`:
/// `Pending → Accepted | Expired | Revoked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "invite_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    /// Waiting for the invitee to accept.
    Pending,
    /// Consumed by the invitee.
    Accepted,
    /// Passed its expiry before being accepted.
    Expired,
    /// Withdrawn by a workspace admin.
    Revoked,
}

impl InviteStatus {
    /// Whether the invite can still be accepted (ignoring expiry time).
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Expired => "expired",
            Self::Revoked => "revoked",
        }
    }
}

impl std::fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An invitation for an email address to join a workspace with a role.
///
/// The token is a single-use unguessable random string, unique across
/// all invites; only a logged-in user whose email matches may accept.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invite {
    /// Unique invite identifier.
    pub id: Uuid,
    /// Target workspace.
    pub workspace_id: Uuid,
    /// Invitee email address.
    pub email: String,
    /// Single-use acceptance token.
    pub token: String,
    /// Role granted on acceptance.
    pub role: WorkspaceRole,
    /// Current lifecycle state.
    pub status: InviteStatus,
    /// When the invite stops being acceptable.
    pub expires_at: DateTime<Utc>,
    /// When the invite was created.
    pub created_at: DateTime<Utc>,
}

impl Invite {
    /// Whether the invite's expiry has passed at the given instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Data required to create a new invite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvite {
    /// Target workspace.
    pub workspace_id: Uuid,
    /// Invitee email address.
    pub email: String,
    /// Single-use acceptance token.
    pub token: String,
    /// Role granted on acceptance.
    pub role: WorkspaceRole,
    /// When the invite stops being acceptable.
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let invite = Invite {
            id: Uuid::new_v4(),
            workspace_id: Uuid::new_v4(),
            email: "b@example.com".into(),
            token: "tok".into(),
            role: WorkspaceRole::Member,
            status: InviteStatus::Pending,
            expires_at: now,
            created_at: now - chrono::Duration::days(3),
        };
        assert!(invite.is_expired_at(now));
        assert!(!invite.is_expired_at(now - chrono::Duration::seconds(1)));
    }
}
