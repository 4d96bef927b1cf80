use crate::ports::Clock;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

struct CacheEntry<V> {
    value: V,
    inserted_at_millis: u64,
}

/// In-memory key/value store with a fixed expiration window.
///
/// An entry is valid while `now - inserted_at < ttl`. Expired entries are
/// never handed out; they are dropped when read or by [`sweep_expired`].
/// Single-key reads and writes are atomic, so concurrent lookups for the
/// same key simply race and the last `put` wins.
///
/// [`sweep_expired`]: ExpiringCache::sweep_expired
pub struct ExpiringCache<V> {
    entries: DashMap<String, CacheEntry<V>, FxBuildHasher>,
    ttl_millis: u64,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ExpiringCache<V> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            ttl_millis: ttl.as_millis() as u64,
            clock,
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now_millis();
        {
            let entry = self.entries.get(key)?;
            if self.is_fresh(entry.inserted_at_millis, now) {
                return Some(entry.value.clone());
            }
        }

        self.entries
            .remove_if(key, |_, e| !self.is_fresh(e.inserted_at_millis, now));
        None
    }

    pub fn put(&self, key: &str, value: V) {
        let inserted_at_millis = self.clock.now_millis();
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at_millis,
            },
        );
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn sweep_expired(&self) -> usize {
        let now = self.clock.now_millis();
        let before = self.entries.len();
        self.entries
            .retain(|_, e| self.is_fresh(e.inserted_at_millis, now));
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!(removed, "Swept expired cache entries");
        }
        removed
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_millis)
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    fn is_fresh(&self, inserted_at_millis: u64, now: u64) -> bool {
        now.saturating_sub(inserted_at_millis) < self.ttl_millis
    }
}
