//! Cache Store Module
//!
//! Content-addressed value cache with an aging sweep standing in for LRU ordering.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats};
use crate::codec;
use crate::error::{JsonCacheError, Result};

// == Cached Value ==
/// A value together with the canonical key it is registered under.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedValue {
    /// Canonical serialization of `value`
    pub key: String,
    pub value: Value,
}

// == Cache Store ==
/// Maps canonical JSON text to the value it denotes.
///
/// Every `get` and `cache` call first runs one aging sweep over all entries;
/// an entry that is not touched for `ttl` store operations is evicted.
#[derive(Debug)]
pub struct CacheStore {
    /// Canonical text -> entry
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Lifetime of a freshly touched entry, in store operations
    ttl: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    ///
    /// # Errors
    /// Returns `TtlConfig` if `ttl` is zero.
    pub fn new(ttl: u64) -> Result<Self> {
        if ttl == 0 {
            return Err(JsonCacheError::TtlConfig(
                "ttl must be a positive integer, got 0".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        })
    }

    // == Get ==
    /// Looks up a value by its canonical key.
    ///
    /// The aging sweep runs first, even when the key turns out to be absent.
    /// A hit restores the entry to a full lifetime.
    pub fn get(&mut self, key: &str) -> Option<CachedValue> {
        self.sweep();
        self.lookup(key)
    }

    // == Cache ==
    /// Registers a value under its canonical key and returns the pair.
    ///
    /// Runs a single aging sweep. If an equal value is already cached it is
    /// touched and returned; otherwise a new entry with a full lifetime is
    /// inserted.
    pub fn cache(&mut self, value: Value) -> CachedValue {
        let key = codec::serialize(&value);
        self.sweep();

        if let Some(hit) = self.lookup(&key) {
            return hit;
        }

        trace!(key = %key, "registering new cache entry");
        self.entries
            .insert(key.clone(), CacheEntry::new(value.clone(), self.ttl));
        self.stats.set_total_entries(self.entries.len());

        CachedValue { key, value }
    }

    // == Remove ==
    /// Drops the entry for `key` without sweeping.
    ///
    /// Returns whether an entry existed.
    pub fn remove(&mut self, key: &str) -> bool {
        let existed = self.entries.remove(key).is_some();
        if existed {
            debug!(key = %key, "invalidated cache entry");
            self.stats.record_invalidation();
            self.stats.set_total_entries(self.entries.len());
        }
        existed
    }

    // == TTL ==
    /// Returns the configured entry lifetime.
    pub fn ttl(&self) -> u64 {
        self.ttl
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Peek ==
    /// Checks whether `key` is live without aging or touching anything.
    #[cfg(test)]
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remaining lifetime of `key`, without aging or touching anything.
    #[cfg(test)]
    pub(crate) fn remaining(&self, key: &str) -> Option<u64> {
        self.entries.get(key).map(|entry| entry.remaining)
    }

    // == Aging Sweep ==
    /// Ages every entry by one operation and evicts those at end of life.
    fn sweep(&mut self) {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.age());

        let evicted = before - self.entries.len();
        if evicted > 0 {
            debug!("Aging sweep evicted {} entries", evicted);
            self.stats.record_evictions(evicted);
            self.stats.set_total_entries(self.entries.len());
        }
    }

    /// Sweep-free lookup that touches on hit.
    fn lookup(&mut self, key: &str) -> Option<CachedValue> {
        match self.entries.get_mut(key) {
            Some(entry) => {
                trace!(key = %key, "cache hit");
                entry.touch(self.ttl);
                self.stats.record_hit();
                Some(CachedValue {
                    key: key.to_string(),
                    value: entry.value.clone(),
                })
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(5).unwrap();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), 5);
    }

    #[test]
    fn test_store_rejects_zero_ttl() {
        let result = CacheStore::new(0);
        assert!(matches!(result, Err(JsonCacheError::TtlConfig(_))));
    }

    #[test]
    fn test_cache_then_get() {
        let mut store = CacheStore::new(5).unwrap();

        let cached = store.cache(json!({"a": [1, 2]}));
        assert_eq!(cached.key, r#"{"a":[1,2]}"#);

        let hit = store.get(&cached.key).unwrap();
        assert_eq!(hit.value, json!({"a": [1, 2]}));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_nonexistent() {
        let mut store = CacheStore::new(5).unwrap();
        assert!(store.get("[1]").is_none());
    }

    #[test]
    fn test_get_is_keyed_on_canonical_text_only() {
        let mut store = CacheStore::new(5).unwrap();
        store.cache(json!([1, 2]));

        assert!(store.get("[1, 2]").is_none());
        assert!(store.get("[1,2]").is_some());
    }

    #[test]
    fn test_equal_values_share_one_entry() {
        let mut store = CacheStore::new(5).unwrap();

        let first = store.cache(json!({"k": "v"}));
        let second = store.cache(json!({"k": "v"}));

        assert_eq!(first.key, second.key);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_untouched_entry_evicted_after_ttl_operations() {
        let mut store = CacheStore::new(3).unwrap();
        store.cache(json!("old"));

        store.get("missing");
        store.get("missing");
        assert!(store.contains(r#""old""#));
        assert_eq!(store.remaining(r#""old""#), Some(1));

        store.get("missing");
        assert!(!store.contains(r#""old""#));
        assert_eq!(store.stats().evictions, 1);
    }

    #[test]
    fn test_recache_at_end_of_life_starts_fresh_entry() {
        let mut store = CacheStore::new(3).unwrap();
        let cached = store.cache(json!(42));

        store.get("missing");
        store.get("missing");
        assert_eq!(store.remaining(&cached.key), Some(1));

        // The sweep evicts before the lookup, so this re-inserts.
        let again = store.cache(json!(42));
        assert_eq!(again.key, cached.key);
        assert_eq!(store.remaining(&cached.key), Some(3));
        assert_eq!(store.stats().evictions, 1);
    }

    #[test]
    fn test_touch_before_last_operation_keeps_entry() {
        let mut store = CacheStore::new(3).unwrap();
        let cached = store.cache(json!(42));

        store.get("missing");
        assert!(store.get(&cached.key).is_some());
        assert_eq!(store.remaining(&cached.key), Some(3));

        store.get("missing");
        store.get("missing");
        assert!(store.contains(&cached.key));
    }

    #[test]
    fn test_cache_sweeps_once() {
        let mut store = CacheStore::new(4).unwrap();
        store.cache(json!("a"));
        store.cache(json!("b"));

        assert_eq!(store.remaining(r#""a""#), Some(3));
        assert_eq!(store.remaining(r#""b""#), Some(4));
    }

    #[test]
    fn test_ttl_one_entry_lives_until_next_operation() {
        let mut store = CacheStore::new(1).unwrap();
        let cached = store.cache(json!(null));
        assert!(store.contains(&cached.key));

        assert!(store.get(&cached.key).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut store = CacheStore::new(5).unwrap();
        let cached = store.cache(json!([true]));

        assert!(store.remove(&cached.key));
        assert!(!store.remove(&cached.key));
        assert!(store.is_empty());
        assert_eq!(store.stats().invalidations, 1);
    }

    #[test]
    fn test_remove_does_not_sweep() {
        let mut store = CacheStore::new(5).unwrap();
        let cached = store.cache(json!(1));
        store.remove("other");
        assert_eq!(store.remaining(&cached.key), Some(5));
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(10).unwrap();

        let cached = store.cache(json!("x")); // miss, then insert
        store.get(&cached.key); // hit
        store.get("nope"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.total_entries, 1);
    }
}
