//! Cache Module
//!
//! Provides a content-addressed value cache with aging-based eviction.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::{CacheStore, CachedValue};
