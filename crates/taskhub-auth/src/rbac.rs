//! Workspace-scoped role-based access control.

use std::sync::Arc;

use uuid::Uuid;

use taskhub_core::error::AppError;
use taskhub_database::repositories::workspace::WorkspaceRepository;
use taskhub_entity::workspace::{WorkspaceMembership, WorkspaceRole};

/// Enforces minimum-role requirements inside a workspace.
///
/// Both "not a member" and "insufficient role" surface as Forbidden, and a
/// workspace that does not exist is indistinguishable from one the caller
/// is not a member of.
#[derive(Clone)]
pub struct WorkspaceAuthorizer {
    /// Membership lookup.
    workspaces: Arc<WorkspaceRepository>,
}

impl std::fmt::Debug for WorkspaceAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceAuthorizer").finish()
    }
}

impl WorkspaceAuthorizer {
    /// Creates a new authorizer.
    pub fn new(workspaces: Arc<WorkspaceRepository>) -> Self {
        Self { workspaces }
    }

    /// Requires that the user holds at least `min_role` in the workspace.
    ///
    /// Returns the membership row so callers can read the concrete role
    /// for finer decisions.
    pub async fn require(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        min_role: WorkspaceRole,
    ) -> Result<WorkspaceMembership, AppError> {
        let membership = self
            .workspaces
            .find_membership(workspace_id, user_id)
            .await?
            .ok_or_else(|| AppError::forbidden("Not a workspace member"))?;

        ensure_role(&membership, min_role)?;

        Ok(membership)
    }

    /// Requires any membership at all (Guest or above).
    pub async fn require_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<WorkspaceMembership, AppError> {
        self.require(workspace_id, user_id, WorkspaceRole::Guest)
            .await
    }
}

/// Pure rank comparison between a held membership and a required minimum.
pub fn ensure_role(
    membership: &WorkspaceMembership,
    min_role: WorkspaceRole,
) -> Result<(), AppError> {
    if membership.role.meets(min_role) {
        Ok(())
    } else {
        Err(AppError::forbidden(format!("Requires role >= {min_role}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taskhub_core::error::ErrorKind;

    fn membership(role: WorkspaceRole) -> WorkspaceMembership {
        WorkspaceMembership {
            id: Uuid::new_v4(),
            workspace_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_exact_role_passes() {
        assert!(ensure_role(&membership(WorkspaceRole::Member), WorkspaceRole::Member).is_ok());
    }

    #[test]
    fn test_higher_role_passes() {
        assert!(ensure_role(&membership(WorkspaceRole::Owner), WorkspaceRole::Admin).is_ok());
    }

    #[test]
    fn test_lower_role_forbidden() {
        let err = ensure_role(&membership(WorkspaceRole::Guest), WorkspaceRole::Member)
            .expect_err("should reject");
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_monotonicity_over_all_pairs() {
        // If a membership satisfies a requirement, it satisfies every
        // weaker requirement too.
        let roles = [
            WorkspaceRole::Guest,
            WorkspaceRole::Member,
            WorkspaceRole::Admin,
            WorkspaceRole::Owner,
        ];
        for held in roles {
            let m = membership(held);
            for (i, required) in roles.iter().enumerate() {
                if ensure_role(&m, *required).is_ok() {
                    for weaker in &roles[..=i] {
                        assert!(ensure_role(&m, *weaker).is_ok());
                    }
                }
            }
        }
    }
}
