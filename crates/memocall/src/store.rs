//! Cache store: unbounded map from key to shared result
//!
//! Entries are never evicted or replaced once written.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use ahash::RandomState;

/// Per-wrapper result store
pub(crate) struct CacheStore<K, V> {
    map: HashMap<K, Arc<V>, RandomState>,
}

impl<K, V> CacheStore<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty store with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Get a shared handle to a stored result
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.map.get(key).cloned()
    }

    /// Store a result unless the key is already present
    ///
    /// Returns the stored handle and whether this call wrote it. An existing
    /// entry always wins so every caller sees the same allocation.
    pub fn insert(&mut self, key: K, value: V) -> (Arc<V>, bool) {
        let mut inserted = false;
        let stored = self.map.entry(key).or_insert_with(|| {
            inserted = true;
            Arc::new(value)
        });
        (Arc::clone(stored), inserted)
    }

    /// Check if a key has a stored result
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Get the number of stored results
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
