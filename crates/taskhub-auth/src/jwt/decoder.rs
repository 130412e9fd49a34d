//! Signed token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use taskhub_core::config::auth::AuthConfig;
use taskhub_core::error::AppError;

use super::claims::Claims;

/// Validates token signatures and expiry.
///
/// Deliberately does NOT check the token kind or the revocation ledger;
/// the identity resolver and session manager own those checks, because
/// what a valid signature means depends on where the token arrived.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, checking signature and expiry.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::claims::TokenKind;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use taskhub_core::error::ErrorKind;
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".into(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_roundtrip() {
        let encoder = JwtEncoder::new(&config());
        let decoder = JwtDecoder::new(&config());
        let user_id = Uuid::new_v4();

        let (token, issued) = encoder.issue(user_id, TokenKind::Refresh).expect("issue");
        let claims = decoder.decode(&token).expect("decode");

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.kind, TokenKind::Refresh);
        assert_eq!(claims.jti, issued.jti);
    }

    #[test]
    fn test_fresh_jti_per_issue() {
        let encoder = JwtEncoder::new(&config());
        let user_id = Uuid::new_v4();
        let (_, a) = encoder.issue(user_id, TokenKind::Access).expect("issue");
        let (_, b) = encoder.issue(user_id, TokenKind::Access).expect("issue");
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&config());
        let other = AuthConfig {
            jwt_secret: "another-secret".into(),
            ..AuthConfig::default()
        };
        let decoder = JwtDecoder::new(&other);

        let (token, _) = encoder
            .issue(Uuid::new_v4(), TokenKind::Access)
            .expect("issue");
        let err = decoder.decode(&token).expect_err("should reject");
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_expired_token_rejected() {
        // Hand-craft claims whose expiry is long past; the ledger never
        // enters into it.
        let claims = Claims {
            sub: Uuid::new_v4(),
            kind: TokenKind::Refresh,
            jti: Uuid::new_v4(),
            iat: Utc::now().timestamp() - 7200,
            exp: Utc::now().timestamp() - 3600,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(b"test-secret"),
        )
        .expect("encode");

        let decoder = JwtDecoder::new(&config());
        let err = decoder.decode(&token).expect_err("should reject");
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert!(err.message.contains("expired"));
    }

    #[test]
    fn test_garbage_rejected() {
        let decoder = JwtDecoder::new(&config());
        assert!(decoder.decode("not-a-token").is_err());
    }
}
