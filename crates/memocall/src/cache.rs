//! Lookup-or-compute core shared by both wrapper flavours

use std::hash::Hash;
use std::sync::Arc;
use parking_lot::Mutex;
use tracing::debug;

use crate::notify::{default_notifier, Notifier, Outcome};
use crate::stats::CacheStats;
use crate::store::CacheStore;

/// Store, counters and notifier owned by one wrapper
pub(crate) struct MemoCache<K, R> {
    store: Mutex<CacheStore<K, R>>,
    stats: CacheStats,
    notifier: Box<dyn Notifier>,
}

impl<K, R> MemoCache<K, R>
where
    K: Hash + Eq,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Mutex::new(CacheStore::with_capacity(capacity)),
            stats: CacheStats::new(),
            notifier: default_notifier(),
        }
    }

    pub fn set_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifier = notifier;
    }

    /// Return the stored result for `key`, or run `compute` and store its `Ok`
    ///
    /// The store lock is released while `compute` runs. Errors pass through
    /// untouched and leave the store unchanged.
    pub fn get_or_compute<E, C>(&self, key: K, compute: C) -> Result<Arc<R>, E>
    where
        C: FnOnce(&K) -> Result<R, E>,
    {
        let cached = self.store.lock().get(&key);
        if let Some(result) = cached {
            self.stats.record_hit();
            debug!("memoized call hit");
            self.notifier.notify(Outcome::Hit);
            return Ok(result);
        }

        self.stats.record_miss();
        debug!("memoized call miss");
        self.notifier.notify(Outcome::Miss);

        match compute(&key) {
            Ok(value) => {
                let (stored, inserted) = self.store.lock().insert(key, value);
                if inserted {
                    self.stats.record_insert();
                } else {
                    debug!("concurrent miss already stored a result, keeping it");
                }
                Ok(stored)
            }
            Err(err) => {
                self.stats.record_failure();
                debug!("wrapped function failed, result not cached");
                Err(err)
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.store.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
