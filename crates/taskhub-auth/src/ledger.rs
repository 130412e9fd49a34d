//! Refresh-token revocation ledger.
//!
//! The ledger is an allowlist: a refresh token is honorable only while an
//! entry for its `jti` exists. Entries are created on issuance with a TTL
//! equal to the token's remaining validity, consumed on rotation, deleted
//! on logout, and expire naturally otherwise. This is the only place
//! server-side session state lives.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;
use uuid::Uuid;

use taskhub_cache::keys;
use taskhub_cache::provider::CacheManager;
use taskhub_core::result::AppResult;
use taskhub_core::traits::cache::CacheProvider;

/// Allowlist of outstanding, un-rotated refresh tokens.
#[derive(Debug, Clone)]
pub struct RefreshTokenLedger {
    /// Backing key-value store.
    cache: Arc<CacheManager>,
}

impl RefreshTokenLedger {
    /// Creates a ledger over the given cache.
    pub fn new(cache: Arc<CacheManager>) -> Self {
        Self { cache }
    }

    /// Registers a freshly issued refresh token.
    ///
    /// Overwrites any existing entry for the jti (jtis are unique per
    /// issuance, so this only matters for replays of the register itself).
    pub async fn register(&self, jti: Uuid, user_id: Uuid, ttl: Duration) -> AppResult<()> {
        self.cache
            .set(&keys::refresh_ledger(jti), &user_id.to_string(), ttl)
            .await
    }

    /// Looks up the owning user of a ledger entry, if present.
    pub async fn lookup(&self, jti: Uuid) -> AppResult<Option<Uuid>> {
        let value = self.cache.get(&keys::refresh_ledger(jti)).await?;
        Ok(value.and_then(|v| parse_owner(jti, &v)))
    }

    /// Atomically removes the entry for the jti and returns its owner.
    ///
    /// At most one of any number of concurrent consumers observes the
    /// owner; every other caller sees `None`. This single round trip is
    /// the check-and-delete that makes refresh rotation race-safe.
    pub async fn consume(&self, jti: Uuid) -> AppResult<Option<Uuid>> {
        let value = self.cache.take(&keys::refresh_ledger(jti)).await?;
        Ok(value.and_then(|v| parse_owner(jti, &v)))
    }

    /// Removes the entry for the jti. Idempotent.
    pub async fn remove(&self, jti: Uuid) -> AppResult<()> {
        self.cache.delete(&keys::refresh_ledger(jti)).await
    }
}

/// Parse a stored owner id; a corrupt entry is treated as absent.
fn parse_owner(jti: Uuid, value: &str) -> Option<Uuid> {
    match Uuid::parse_str(value) {
        Ok(owner) => Some(owner),
        Err(_) => {
            warn!(%jti, "Discarding unparseable revocation ledger entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskhub_cache::memory::MemoryCacheProvider;
    use taskhub_core::config::cache::MemoryCacheConfig;

    fn make_ledger() -> RefreshTokenLedger {
        let provider = MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 100 }, 60);
        RefreshTokenLedger::new(Arc::new(CacheManager::from_provider(Arc::new(provider))))
    }

    #[tokio::test]
    async fn test_register_and_lookup() {
        let ledger = make_ledger();
        let jti = Uuid::new_v4();
        let user = Uuid::new_v4();

        ledger
            .register(jti, user, Duration::from_secs(60))
            .await
            .expect("register");
        assert_eq!(ledger.lookup(jti).await.expect("lookup"), Some(user));
    }

    #[tokio::test]
    async fn test_consume_is_once_only() {
        let ledger = make_ledger();
        let jti = Uuid::new_v4();
        let user = Uuid::new_v4();

        ledger
            .register(jti, user, Duration::from_secs(60))
            .await
            .expect("register");

        assert_eq!(ledger.consume(jti).await.expect("consume"), Some(user));
        assert_eq!(ledger.consume(jti).await.expect("consume"), None);
        assert_eq!(ledger.lookup(jti).await.expect("lookup"), None);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let ledger = make_ledger();
        let jti = Uuid::new_v4();

        ledger
            .register(jti, Uuid::new_v4(), Duration::from_secs(60))
            .await
            .expect("register");

        ledger.remove(jti).await.expect("remove");
        ledger.remove(jti).await.expect("remove again");
        assert_eq!(ledger.lookup(jti).await.expect("lookup"), None);
    }

    #[tokio::test]
    async fn test_entry_expires_with_ttl() {
        let ledger = make_ledger();
        let jti = Uuid::new_v4();

        ledger
            .register(jti, Uuid::new_v4(), Duration::from_millis(50))
            .await
            .expect("register");

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(ledger.lookup(jti).await.expect("lookup"), None);
    }
}
