//! Token lifecycle tests: issuance, rotation, replay detection, logout.
//!
//! These run against the in-memory cache provider and a lazy (never
//! connected) database pool; the token paths under test never touch
//! the database.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use taskhub_auth::identity::IdentityResolver;
use taskhub_auth::jwt::{Claims, JwtDecoder, JwtEncoder, TokenKind};
use taskhub_auth::ledger::RefreshTokenLedger;
use taskhub_auth::password::{PasswordHasher, PasswordValidator};
use taskhub_auth::session::SessionManager;
use taskhub_cache::memory::MemoryCacheProvider;
use taskhub_cache::provider::CacheManager;
use taskhub_core::config::auth::AuthConfig;
use taskhub_core::config::cache::MemoryCacheConfig;
use taskhub_core::error::ErrorKind;
use taskhub_database::repositories::user::UserRepository;

const TEST_SECRET: &str = "token-lifecycle-test-secret";

struct Harness {
    manager: SessionManager,
    decoder: Arc<JwtDecoder>,
    ledger: Arc<RefreshTokenLedger>,
    resolver: IdentityResolver,
}

fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_SECRET.to_string(),
        ..AuthConfig::default()
    }
}

fn harness() -> Harness {
    let config = auth_config();

    let provider = MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 1000 }, 300);
    let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));

    let encoder = Arc::new(JwtEncoder::new(&config));
    let decoder = Arc::new(JwtDecoder::new(&config));
    let ledger = Arc::new(RefreshTokenLedger::new(cache));

    // Lazy pool: parses the URL but never connects.
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost:5432/taskhub_never_used")
        .expect("lazy pool");
    let users = Arc::new(UserRepository::new(pool));

    let manager = SessionManager::new(
        encoder,
        decoder.clone(),
        ledger.clone(),
        users.clone(),
        Arc::new(PasswordHasher::new()),
        PasswordValidator::new(&config),
    );
    let resolver = IdentityResolver::new(decoder.clone(), users);

    Harness {
        manager,
        decoder,
        ledger,
        resolver,
    }
}

#[tokio::test]
async fn test_issued_pair_decodes_with_matching_subject() {
    let h = harness();
    let user_id = Uuid::new_v4();

    let pair = h.manager.issue_pair(user_id).await.expect("issue pair");

    let access = h.decoder.decode(&pair.access_token).expect("decode access");
    assert_eq!(access.sub, user_id);
    assert_eq!(access.kind, TokenKind::Access);

    let refresh = h
        .decoder
        .decode(&pair.refresh_token)
        .expect("decode refresh");
    assert_eq!(refresh.sub, user_id);
    assert_eq!(refresh.kind, TokenKind::Refresh);
    assert_ne!(access.jti, refresh.jti);
}

#[tokio::test]
async fn test_rotation_kills_the_old_token() {
    let h = harness();
    let user_id = Uuid::new_v4();

    let r0 = h.manager.issue_pair(user_id).await.expect("issue").refresh_token;

    // First rotation succeeds and yields a new refresh token.
    let r1 = h.manager.refresh(&r0).await.expect("first rotation").refresh_token;
    assert_ne!(r0, r1);

    // Replaying the consumed token is rejected, even though its
    // signature and expiry still verify.
    let err = h.manager.refresh(&r0).await.expect_err("replay must fail");
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert!(err.message.contains("reused or revoked"));

    // The new token still rotates normally.
    h.manager.refresh(&r1).await.expect("second rotation");
}

#[tokio::test]
async fn test_logout_invalidates_refresh_token() {
    let h = harness();
    let user_id = Uuid::new_v4();

    let token = h.manager.issue_pair(user_id).await.expect("issue").refresh_token;

    h.manager.logout(&token).await.expect("logout");

    let err = h.manager.refresh(&token).await.expect_err("must fail");
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert!(err.message.contains("reused or revoked"));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let h = harness();
    let user_id = Uuid::new_v4();

    let token = h.manager.issue_pair(user_id).await.expect("issue").refresh_token;

    h.manager.logout(&token).await.expect("first logout");
    h.manager.logout(&token).await.expect("second logout");
}

#[tokio::test]
async fn test_access_token_cannot_rotate() {
    let h = harness();
    let user_id = Uuid::new_v4();

    let pair = h.manager.issue_pair(user_id).await.expect("issue");

    let err = h
        .manager
        .refresh(&pair.access_token)
        .await
        .expect_err("wrong kind must fail");
    assert_eq!(err.kind, ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_expired_refresh_rejected_even_with_ledger_entry() {
    let h = harness();
    let user_id = Uuid::new_v4();

    // Hand-craft an expired refresh token and plant its jti in the
    // ledger anyway: expiry is enforced by the codec independently of
    // ledger presence.
    let claims = Claims {
        sub: user_id,
        kind: TokenKind::Refresh,
        jti: Uuid::new_v4(),
        iat: chrono::Utc::now().timestamp() - 7200,
        exp: chrono::Utc::now().timestamp() - 3600,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("encode");

    h.ledger
        .register(claims.jti, user_id, std::time::Duration::from_secs(600))
        .await
        .expect("register");

    let err = h.manager.refresh(&token).await.expect_err("must fail");
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert!(err.message.contains("expired"));
}

#[tokio::test]
async fn test_identity_rejects_missing_token() {
    let h = harness();
    let err = h.resolver.resolve(None).await.expect_err("must fail");
    assert_eq!(err.kind, ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_identity_rejects_garbage_token() {
    let h = harness();
    let err = h
        .resolver
        .resolve(Some("definitely-not-a-jwt"))
        .await
        .expect_err("must fail");
    assert_eq!(err.kind, ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_identity_rejects_refresh_token() {
    let h = harness();
    let pair = h
        .manager
        .issue_pair(Uuid::new_v4())
        .await
        .expect("issue");

    // The kind check fires before any user lookup.
    let err = h
        .resolver
        .resolve(Some(&pair.refresh_token))
        .await
        .expect_err("must fail");
    assert_eq!(err.kind, ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_concurrent_rotations_allow_at_most_one_winner() {
    let h = harness();
    let user_id = Uuid::new_v4();
    let token = h.manager.issue_pair(user_id).await.expect("issue").refresh_token;

    let manager = Arc::new(h.manager);
    let mut handles = Vec::new();
    for _ in 0..8 {
        let manager = manager.clone();
        let token = token.clone();
        handles.push(tokio::spawn(async move { manager.refresh(&token).await }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.expect("join").is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1, "exactly one concurrent rotation may win");
}
