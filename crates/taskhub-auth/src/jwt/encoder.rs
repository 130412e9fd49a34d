//! Signed token creation with configurable TTLs.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use taskhub_core::config::auth::AuthConfig;
use taskhub_core::error::AppError;

use super::claims::{Claims, TokenKind};

/// Creates signed access and refresh tokens.
///
/// The signing key is taken from [`AuthConfig`] once at construction; it is
/// process-wide configuration, and rotating it invalidates every
/// outstanding token.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in days.
    refresh_ttl_days: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

/// A freshly issued access + refresh token pair.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_minutes: config.access_ttl_minutes as i64,
            refresh_ttl_days: config.refresh_ttl_days as i64,
        }
    }

    /// Signs a token of the given kind for the user, with a fresh `jti`.
    pub fn issue(&self, user_id: Uuid, kind: TokenKind) -> Result<(String, Claims), AppError> {
        let now = Utc::now();
        let exp = match kind {
            TokenKind::Access => now + chrono::Duration::minutes(self.access_ttl_minutes),
            TokenKind::Refresh => now + chrono::Duration::days(self.refresh_ttl_days),
        };

        let claims = Claims {
            sub: user_id,
            kind,
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok((token, claims))
    }
}
