//! Session lifecycle manager — registration, login, refresh rotation, logout.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;

use taskhub_core::error::AppError;
use taskhub_database::repositories::user::UserRepository;
use taskhub_entity::user::{CreateUser, User};

use crate::jwt::{JwtDecoder, JwtEncoder, TokenKind, TokenPair};
use crate::ledger::RefreshTokenLedger;
use crate::password::{PasswordHasher, PasswordValidator};

/// Manages the complete session lifecycle.
///
/// Each refresh token lineage moves `issued → rotated | revoked` exactly
/// once: every successful refresh consumes the old ledger entry and
/// registers a new one, and logout deletes the current entry. A consumed
/// or deleted jti is never honored again.
#[derive(Clone)]
pub struct SessionManager {
    /// Token signer.
    encoder: Arc<JwtEncoder>,
    /// Token verifier.
    decoder: Arc<JwtDecoder>,
    /// Refresh-token allowlist.
    ledger: Arc<RefreshTokenLedger>,
    /// User lookup and creation.
    users: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password strength policy.
    password_policy: PasswordValidator,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        ledger: Arc<RefreshTokenLedger>,
        users: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        password_policy: PasswordValidator,
    ) -> Self {
        Self {
            encoder,
            decoder,
            ledger,
            users,
            hasher,
            password_policy,
        }
    }

    /// Registers a new user and signs them straight in.
    ///
    /// A duplicate email surfaces as Conflict from the repository's
    /// unique-constraint mapping.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<(TokenPair, User), AppError> {
        self.password_policy.validate(password)?;

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
                name: name.map(String::from),
            })
            .await?;

        let tokens = self.issue_pair(user.id).await?;
        info!(user_id = %user.id, "User registered");

        Ok((tokens, user))
    }

    /// Verifies credentials and issues a fresh token pair.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller; both produce the same rejection.
    pub async fn login(&self, email: &str, password: &str) -> Result<(TokenPair, User), AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let password_valid = self
            .hasher
            .verify_password(password, &user.password_hash)?;

        if !password_valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let tokens = self.issue_pair(user.id).await?;
        info!(user_id = %user.id, "Login successful");

        Ok((tokens, user))
    }

    /// Mints a fresh access + refresh pair and registers the refresh
    /// token's jti in the ledger with TTL equal to its remaining validity.
    pub async fn issue_pair(&self, user_id: Uuid) -> Result<TokenPair, AppError> {
        let (access_token, access_claims) = self.encoder.issue(user_id, TokenKind::Access)?;
        let (refresh_token, refresh_claims) = self.encoder.issue(user_id, TokenKind::Refresh)?;

        self.ledger
            .register(
                refresh_claims.jti,
                user_id,
                Duration::from_secs(refresh_claims.remaining_ttl_seconds()),
            )
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at: access_claims.expires_at(),
            refresh_expires_at: refresh_claims.expires_at(),
        })
    }

    /// Rotates a refresh token: consumes the old one, issues a new pair.
    ///
    /// The ledger consume is a single atomic round trip, so when two
    /// requests race to rotate the same token, at most one succeeds;
    /// the other is rejected as a reuse. A detected reuse always rejects
    /// the request; there is no fallback issuance.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        // Step 1: signature and expiry.
        let claims = self.decoder.decode(refresh_token)?;

        // Step 2: only refresh tokens rotate.
        if claims.kind != TokenKind::Refresh {
            return Err(AppError::unauthorized("Not a refresh token"));
        }

        // Steps 3+4: check-and-delete in one operation. An absent entry
        // means the token was already rotated, revoked, or expired: the
        // replay-detection branch.
        match self.ledger.consume(claims.jti).await? {
            Some(owner) if owner == claims.sub => {}
            Some(owner) => {
                warn!(
                    jti = %claims.jti,
                    subject = %claims.sub,
                    owner = %owner,
                    "Refresh token subject does not match ledger owner"
                );
                return Err(AppError::unauthorized("Refresh token reused or revoked"));
            }
            None => {
                warn!(
                    jti = %claims.jti,
                    subject = %claims.sub,
                    "Refresh token replay or revoked token detected"
                );
                return Err(AppError::unauthorized("Refresh token reused or revoked"));
            }
        }

        // Steps 5+6: brand-new pair; the old refresh token is now
        // permanently dead.
        let tokens = self.issue_pair(claims.sub).await?;
        info!(user_id = %claims.sub, "Refresh token rotated");

        Ok(tokens)
    }

    /// Revokes a refresh token at logout.
    ///
    /// Idempotent: revoking an already-rotated or already-revoked token
    /// is not an error.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        let claims = self.decoder.decode(refresh_token)?;

        if claims.kind != TokenKind::Refresh {
            return Err(AppError::unauthorized("Not a refresh token"));
        }

        self.ledger.remove(claims.jti).await?;
        info!(user_id = %claims.sub, jti = %claims.jti, "Refresh token revoked");

        Ok(())
    }
}
