//! In-memory rate table cache

use crate::types::{RateSnapshot, RateTable};
use std::time::Duration;
use tokio::sync::RwLock;

/// Holds the most recently fetched rate table
///
/// The cache stores at most one snapshot and swaps it out wholesale on
/// every refresh, so readers never observe a partially updated table. A
/// cache that has never been populated is represented by `None` rather
/// than a zero timestamp, and is unconditionally stale.
pub struct RateCache {
    snapshot: RwLock<Option<RateSnapshot>>,
}

impl RateCache {
    /// Creates an empty, never-populated cache
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(None),
        }
    }

    /// Gets the current snapshot regardless of freshness
    pub async fn get(&self) -> Option<RateSnapshot> {
        self.snapshot.read().await.clone()
    }

    /// Gets the current snapshot only if it is inside the freshness window
    pub async fn fresh(&self, max_age: Duration) -> Option<RateSnapshot> {
        let guard = self.snapshot.read().await;
        match guard.as_ref() {
            Some(snapshot) if snapshot.is_fresh(max_age) => {
                tracing::debug!(age_ms = snapshot.age().as_millis() as u64, "rate cache hit");
                Some(snapshot.clone())
            }
            Some(snapshot) => {
                tracing::debug!(age_ms = snapshot.age().as_millis() as u64, "rate cache stale");
                None
            }
            None => {
                tracing::debug!("rate cache never populated");
                None
            }
        }
    }

    /// Installs a new snapshot timestamped now, replacing the old table
    /// entirely
    pub async fn replace(&self, rates: RateTable) {
        let mut guard = self.snapshot.write().await;
        *guard = Some(RateSnapshot::new(rates));
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Unit;

    #[tokio::test]
    async fn empty_cache_is_stale() {
        let cache = RateCache::new();
        assert!(cache.get().await.is_none());
        assert!(cache.fresh(Duration::from_secs(3600)).await.is_none());
    }

    #[tokio::test]
    async fn replaced_cache_is_fresh_inside_window() {
        let cache = RateCache::new();
        let mut rates = RateTable::new();
        rates.insert(Unit::Usd, 65000.0);
        cache.replace(rates).await;

        let snapshot = cache.fresh(Duration::from_secs(60)).await.unwrap();
        assert_eq!(snapshot.rate(Unit::Usd), Some(65000.0));
    }

    #[tokio::test]
    async fn replace_swaps_the_whole_table() {
        let cache = RateCache::new();
        let mut first = RateTable::new();
        first.insert(Unit::Usd, 65000.0);
        first.insert(Unit::Eur, 60000.0);
        cache.replace(first).await;

        let mut second = RateTable::new();
        second.insert(Unit::Usd, 66000.0);
        cache.replace(second).await;

        let snapshot = cache.get().await.unwrap();
        assert_eq!(snapshot.rate(Unit::Usd), Some(66000.0));
        // No partial merge: the EUR entry from the first table is gone.
        assert_eq!(snapshot.rate(Unit::Eur), None);
    }

    #[tokio::test]
    async fn timestamps_never_go_backwards() {
        let cache = RateCache::new();
        cache.replace(RateTable::new()).await;
        let first = cache.get().await.unwrap().fetched_at;
        cache.replace(RateTable::new()).await;
        let second = cache.get().await.unwrap().fetched_at;
        assert!(second >= first);
    }

    #[tokio::test]
    async fn expired_snapshot_is_not_fresh() {
        let cache = RateCache::new();
        cache.replace(RateTable::new()).await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(cache.fresh(Duration::from_millis(10)).await.is_none());
        // Still retrievable via get, staleness is the caller's decision.
        assert!(cache.get().await.is_some());
    }
}
