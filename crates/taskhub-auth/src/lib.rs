//! # taskhub-auth
//!
//! The authorization and session-lifecycle core of Taskhub.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and strength policy
//! - `jwt` — signed bearer token encoding and validation
//! - `ledger` — the refresh-token revocation ledger (allowlist)
//! - `session` — token pair issuance, refresh rotation, logout revocation
//! - `identity` — access token → authenticated user resolution
//! - `rbac` — workspace-scoped role checks
//!
//! Access tokens are stateless: validating one never touches the ledger.
//! Refresh tokens are stateful: only a token whose `jti` is present in the
//! ledger is honored, and every use consumes the entry, so a stolen token
//! that has already been rotated is rejected even though its signature and
//! expiry still verify.

pub mod identity;
pub mod jwt;
pub mod ledger;
pub mod password;
pub mod rbac;
pub mod session;

pub use identity::IdentityResolver;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenKind, TokenPair};
pub use ledger::RefreshTokenLedger;
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::WorkspaceAuthorizer;
pub use session::SessionManager;
