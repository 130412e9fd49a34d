//! JWT claims structure used in access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload embedded in every token.
///
/// Tokens are self-contained: subject, kind, unique id, and expiry are all
/// inside the signed payload. Nothing else about a session exists
/// server-side except the refresh token's ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Token kind: access or refresh.
    pub kind: TokenKind,
    /// Unique token ID, the revocation-ledger key for refresh tokens.
    pub jti: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Short-lived, stateless token for API requests.
    Access,
    /// Long-lived token for obtaining new pairs; honored only while its
    /// jti is in the revocation ledger.
    Refresh,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with_exp(exp: i64) -> Claims {
        Claims {
            sub: Uuid::new_v4(),
            kind: TokenKind::Access,
            jti: Uuid::new_v4(),
            iat: Utc::now().timestamp(),
            exp,
        }
    }

    #[test]
    fn test_expired_claims() {
        let claims = claims_with_exp(Utc::now().timestamp() - 60);
        assert!(claims.is_expired());
        assert_eq!(claims.remaining_ttl_seconds(), 0);
    }

    #[test]
    fn test_live_claims() {
        let claims = claims_with_exp(Utc::now().timestamp() + 600);
        assert!(!claims.is_expired());
        let remaining = claims.remaining_ttl_seconds();
        assert!(remaining > 590 && remaining <= 600);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TokenKind::Refresh).unwrap(),
            "\"refresh\""
        );
    }
}
