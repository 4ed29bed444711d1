//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with an operation-count lifetime.

use serde_json::Value;

// == Cache Entry ==
/// Represents a single cache entry with value and remaining lifetime.
///
/// `remaining` stays within `[1, ttl]` for as long as the entry exists; the
/// store drops the entry in the same sweep that would take it to zero.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: Value,
    /// Store operations left before eviction
    pub remaining: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with a full lifetime.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Lifetime in store operations, must be positive
    pub fn new(value: Value, ttl: u64) -> Self {
        Self {
            value,
            remaining: ttl,
        }
    }

    // == Age ==
    /// Ages the entry by one store operation.
    ///
    /// # Returns
    /// - `true` if the entry survives (remaining was decremented)
    /// - `false` if the entry reached the end of its life and must be evicted
    pub fn age(&mut self) -> bool {
        if self.remaining <= 1 {
            false
        } else {
            self.remaining -= 1;
            true
        }
    }

    // == Touch ==
    /// Restores the entry to a full lifetime.
    pub fn touch(&mut self, ttl: u64) {
        self.remaining = ttl;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(json!({"a": 1}), 5);

        assert_eq!(entry.value, json!({"a": 1}));
        assert_eq!(entry.remaining, 5);
    }

    #[test]
    fn test_entry_ages_down_to_eviction() {
        let mut entry = CacheEntry::new(json!(null), 3);

        assert!(entry.age());
        assert_eq!(entry.remaining, 2);
        assert!(entry.age());
        assert_eq!(entry.remaining, 1);
        assert!(!entry.age());
    }

    #[test]
    fn test_entry_with_ttl_one_never_survives_a_sweep() {
        let mut entry = CacheEntry::new(json!(true), 1);
        assert!(!entry.age());
    }

    #[test]
    fn test_touch_resets_lifetime() {
        let mut entry = CacheEntry::new(json!([1, 2]), 4);
        entry.age();
        entry.age();
        assert_eq!(entry.remaining, 2);

        entry.touch(4);
        assert_eq!(entry.remaining, 4);
    }
}
