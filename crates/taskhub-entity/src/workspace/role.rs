//! Workspace role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a user can hold inside a workspace.
///
/// Roles are totally ordered by privilege rank: Owner > Admin > Member > Guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "workspace_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceRole {
    /// Workspace creator tier. Full control.
    Owner,
    /// Can manage members and invites.
    Admin,
    /// Can create and modify projects and tasks.
    Member,
    /// Read-only access.
    Guest,
}

impl WorkspaceRole {
    /// Return the privilege rank (higher = more privileged).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Owner => 40,
            Self::Admin => 30,
            Self::Member => 20,
            Self::Guest => 10,
        }
    }

    /// Check whether this role has at least the given role's privileges.
    pub fn meets(&self, minimum: WorkspaceRole) -> bool {
        self.rank() >= minimum.rank()
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Guest => "guest",
        }
    }
}

impl fmt::Display for WorkspaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkspaceRole {
    type Err = taskhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            "guest" => Ok(Self::Guest),
            _ => Err(taskhub_core::AppError::validation(format!(
                "Invalid workspace role: '{s}'. Expected one of: owner, admin, member, guest"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(WorkspaceRole::Owner.rank() > WorkspaceRole::Admin.rank());
        assert!(WorkspaceRole::Admin.rank() > WorkspaceRole::Member.rank());
        assert!(WorkspaceRole::Member.rank() > WorkspaceRole::Guest.rank());
    }

    #[test]
    fn test_meets_is_reflexive() {
        for role in [
            WorkspaceRole::Owner,
            WorkspaceRole::Admin,
            WorkspaceRole::Member,
            WorkspaceRole::Guest,
        ] {
            assert!(role.meets(role));
        }
    }

    #[test]
    fn test_meets_monotonicity() {
        // A role that satisfies a stricter requirement satisfies every
        // weaker one too.
        let ordered = [
            WorkspaceRole::Guest,
            WorkspaceRole::Member,
            WorkspaceRole::Admin,
            WorkspaceRole::Owner,
        ];
        for (i, held) in ordered.iter().enumerate() {
            for required in &ordered[..=i] {
                assert!(held.meets(*required), "{held} should meet {required}");
            }
            for required in &ordered[i + 1..] {
                assert!(!held.meets(*required), "{held} should not meet {required}");
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "admin".parse::<WorkspaceRole>().unwrap(),
            WorkspaceRole::Admin
        );
        assert_eq!(
            "OWNER".parse::<WorkspaceRole>().unwrap(),
            WorkspaceRole::Owner
        );
        assert!("superuser".parse::<WorkspaceRole>().is_err());
    }
}
