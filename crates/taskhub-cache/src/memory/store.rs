//! In-memory cache implementation using the moka crate.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;

use taskhub_core::config::cache::MemoryCacheConfig;
use taskhub_core::result::AppResult;
use taskhub_core::traits::cache::CacheProvider;

/// A cached value together with its own TTL.
///
/// Revocation-ledger entries live as long as the token they guard (days),
/// while dashboard summaries expire in seconds, so TTL must be tracked
/// per entry rather than at the cache level.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expiry policy that reads each entry's own TTL.
struct PerEntryExpiry;

impl Expiry<String, Entry> for PerEntryExpiry {
    fn expire_after_create(&self, _key: &String, entry: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-memory cache provider using moka.
#[derive(Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: Cache<String, Entry>,
    /// Default TTL for entries.
    default_ttl: Duration,
}

impl std::fmt::Debug for MemoryCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheProvider")
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig, default_ttl_seconds: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(PerEntryExpiry)
            .build();

        Self {
            cache,
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let entry = Entry {
            value: value.to_string(),
            ttl,
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn set_default(&self, key: &str, value: &str) -> AppResult<()> {
        self.set(key, value, self.default_ttl).await
    }

    async fn take(&self, key: &str) -> AppResult<Option<String>> {
        // moka's remove returns the evicted value; concurrent takes of the
        // same key hand the value to exactly one caller.
        Ok(self.cache.remove(key).await.map(|entry| entry.value))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> AppResult<bool> {
        // moka cannot change the TTL of an existing entry; re-insert.
        match self.cache.get(key).await {
            Some(entry) => {
                self.cache
                    .insert(
                        key.to_string(),
                        Entry {
                            value: entry.value,
                            ttl,
                        },
                    )
                    .await;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn flush_all(&self) -> AppResult<()> {
        self.cache.invalidate_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_provider() -> MemoryCacheProvider {
        let config = MemoryCacheConfig { max_capacity: 1000 };
        MemoryCacheProvider::new(&config, 60)
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = make_provider();
        cache
            .set("k", "v", Duration::from_secs(60))
            .await
            .expect("set");
        assert_eq!(cache.get("k").await.expect("get"), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_take_consumes_value() {
        let cache = make_provider();
        cache
            .set("k", "v", Duration::from_secs(60))
            .await
            .expect("set");

        assert_eq!(cache.take("k").await.expect("take"), Some("v".to_string()));
        // A second take observes nothing.
        assert_eq!(cache.take("k").await.expect("take"), None);
        assert_eq!(cache.get("k").await.expect("get"), None);
    }

    #[tokio::test]
    async fn test_per_entry_ttl() {
        let cache = make_provider();
        cache
            .set("short", "v", Duration::from_millis(50))
            .await
            .expect("set");
        cache
            .set("long", "v", Duration::from_secs(300))
            .await
            .expect("set");

        tokio::time::sleep(Duration::from_millis(120)).await;

        assert_eq!(cache.get("short").await.expect("get"), None);
        assert_eq!(
            cache.get("long").await.expect("get"),
            Some("v".to_string())
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let cache = make_provider();
        cache
            .set("k", "v", Duration::from_secs(60))
            .await
            .expect("set");
        cache.delete("k").await.expect("delete");
        cache.delete("k").await.expect("delete again");
        assert_eq!(cache.get("k").await.expect("get"), None);
    }
}
