//! Process-local output cache.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use studio_core::ports::{Cache, CacheError};

struct CacheEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Keyed string cache with per-entry expiry, used for rendered documents
/// such as the sitemap. Entries are lost on restart.
#[derive(Default)]
pub struct InMemoryCache {
    store: RwLock<HashMap<String, CacheEntry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        {
            let store = self.store.read().await;
            let entry = store.get(key)?;
            if !entry.is_expired(now) {
                return Some(entry.value.clone());
            }
        }

        // Expired: evict under the write lock unless a writer refreshed it.
        let mut store = self.store.write().await;
        if store.get(key).is_some_and(|entry| entry.is_expired(now)) {
            store.remove(key);
        }
        None
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let expires_at = match ttl {
            Some(ttl) => Some(
                Instant::now()
                    .checked_add(ttl)
                    .ok_or_else(|| CacheError::Operation(format!("ttl out of range: {ttl:?}")))?,
            ),
            None => None,
        };

        let mut store = self.store.write().await;
        store.insert(
            key.to_owned(),
            CacheEntry {
                value: value.to_owned(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        let mut store = self.store.write().await;
        store.remove(key);
        tracing::debug!(key, "Cache entry invalidated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get() {
        let cache = InMemoryCache::new();
        cache.set("sitemap", "<urlset/>", None).await.unwrap();
        assert_eq!(cache.get("sitemap").await.as_deref(), Some("<urlset/>"));
    }

    #[tokio::test]
    async fn invalidate_forces_a_miss() {
        let cache = InMemoryCache::new();
        cache.set("sitemap", "<urlset/>", None).await.unwrap();
        cache.invalidate("sitemap").await.unwrap();
        assert_eq!(cache.get("sitemap").await, None);
    }

    #[tokio::test]
    async fn expired_entries_are_misses() {
        let cache = InMemoryCache::new();
        cache
            .set("sitemap", "<urlset/>", Some(Duration::ZERO))
            .await
            .unwrap();
        assert_eq!(cache.get("sitemap").await, None);
    }
}
