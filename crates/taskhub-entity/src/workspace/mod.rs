//! Workspace entities: the tenant boundary, memberships, roles, and invites.

pub mod invite;
pub mod member;
pub mod model;
pub mod role;

pub use invite::{Invite, InviteStatus, NewInvite};
pub use member::WorkspaceMembership;
pub use model::Workspace;
pub use role::WorkspaceRole;
