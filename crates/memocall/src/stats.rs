//! Cache statistics tracking

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one memoized wrapper
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    failures: AtomicU64,
    key_errors: AtomicU64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss
    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a stored result
    pub(crate) fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed computation
    pub(crate) fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected call key
    pub(crate) fn record_key_error(&self) {
        self.key_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Calls answered from the store
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Calls that ran the wrapped function
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Results written to the store
    pub fn inserts(&self) -> u64 {
        self.inserts.load(Ordering::Relaxed)
    }

    /// Misses whose wrapped function returned an error
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Calls rejected because their arguments could not form a key
    pub fn key_errors(&self) -> u64 {
        self.key_errors.load(Ordering::Relaxed)
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let stats = CacheStats::new();

        stats.record_hit();
        stats.record_hit();
        stats.record_miss();

        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.misses(), 1);
        assert_eq!(stats.hit_ratio(), 2.0 / 3.0);
    }

    #[test]
    fn test_stats_empty_ratio() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_ratio(), 0.0);
    }

    #[test]
    fn test_stats_failures_and_key_errors() {
        let stats = CacheStats::new();

        stats.record_miss();
        stats.record_failure();
        stats.record_key_error();

        assert_eq!(stats.failures(), 1);
        assert_eq!(stats.key_errors(), 1);
        assert_eq!(stats.inserts(), 0);
    }
}
