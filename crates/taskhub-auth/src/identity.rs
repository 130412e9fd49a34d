//! Access token → authenticated user resolution.

use std::sync::Arc;

use taskhub_core::error::AppError;
use taskhub_database::repositories::user::UserRepository;
use taskhub_entity::user::User;

use crate::jwt::{JwtDecoder, TokenKind};

/// Resolves an incoming bearer token to the authenticated user record.
///
/// Access tokens are stateless: resolution verifies the signature, expiry,
/// and kind, then loads the user; it never consults the revocation
/// ledger. Revocability is traded for a ledger-free hot path; the short
/// access TTL absorbs the risk.
#[derive(Clone)]
pub struct IdentityResolver {
    /// Token verifier.
    decoder: Arc<JwtDecoder>,
    /// User lookup.
    users: Arc<UserRepository>,
}

impl std::fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityResolver").finish()
    }
}

impl IdentityResolver {
    /// Creates a new resolver.
    pub fn new(decoder: Arc<JwtDecoder>, users: Arc<UserRepository>) -> Self {
        Self { decoder, users }
    }

    /// Resolves a bearer token to a user.
    ///
    /// Missing token, failed decode, wrong kind, and unknown subject
    /// (deleted user) all reject identically.
    pub async fn resolve(&self, bearer: Option<&str>) -> Result<User, AppError> {
        let token = bearer.ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

        let claims = self.decoder.decode(token)?;

        if claims.kind != TokenKind::Access {
            return Err(AppError::unauthorized("Not an access token"));
        }

        self.users
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("User not found"))
    }
}
