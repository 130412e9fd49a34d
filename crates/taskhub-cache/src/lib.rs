//! # taskhub-cache
//!
//! Cache provider implementations for Taskhub:
//!
//! - **memory**: In-process cache using [moka](https://crates.io/crates/moka)
//! - **redis**: Redis-backed cache using the [redis](https://crates.io/crates/redis) crate
//!
//! The provider is selected at runtime based on configuration. Besides
//! read-through caching (dashboard summaries), the cache is the backing
//! store of the refresh-token revocation ledger, which relies on the
//! provider's atomic `take` operation.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
