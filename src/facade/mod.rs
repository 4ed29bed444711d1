//! Accessor/Mutator Facade
//!
//! Every operation takes JSON text, resolves it to a cached value, and hands
//! any JSON result back as a canonical key registered in the same store.
//! Malformed input never raises; it yields `None` (or `false` for boolean
//! queries), which the host treats as an empty result.

mod index;
mod inspect;
mod member;


use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, CachedValue};
use crate::codec;
use crate::error::Result;

/// Largest array `set_member` will grow to
pub const MAX_ARRAY_LENGTH: usize = 1 << 20;

// == JSON Type ==
/// Shape of a JSON value as reported by `classify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Null,
    Number,
    Boolean,
    String,
    Array,
    Object,
}

impl JsonType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonType::Null,
            Value::Number(_) => JsonType::Number,
            Value::Bool(_) => JsonType::Boolean,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Number => "number",
            JsonType::Boolean => "boolean",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == JSON Facade ==
/// Text-in, text-out accessor over a content-addressed value store.
#[derive(Debug)]
pub struct JsonFacade {
    store: CacheStore,
}

impl JsonFacade {
    // == Constructors ==
    /// Wraps an existing store.
    pub fn new(store: CacheStore) -> Self {
        Self { store }
    }

    /// Builds a facade over a fresh store with the given entry lifetime.
    ///
    /// # Errors
    /// Returns `TtlConfig` if `ttl` is zero.
    pub fn with_ttl(ttl: u64) -> Result<Self> {
        Ok(Self::new(CacheStore::new(ttl)?))
    }

    // == Parse ==
    /// Returns the canonical key for `text`, or `None` if it is not JSON.
    pub fn parse(&mut self, text: &str) -> Option<String> {
        self.resolve(text).map(|resolved| resolved.key)
    }

    // == From String ==
    /// Wraps arbitrary text as a JSON string value and returns its key.
    pub fn from_string(&mut self, text: &str) -> String {
        self.register(Value::String(text.to_string()))
    }

    // == Introspection ==
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    pub fn ttl(&self) -> u64 {
        self.store.ttl()
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &CacheStore {
        &self.store
    }

    // == Resolve ==
    /// Turns JSON text into a cached value.
    ///
    /// A store hit is used as-is. On a miss the text is parsed and the value
    /// registered, so the returned key is canonical even when `text` is not.
    fn resolve(&mut self, text: &str) -> Option<CachedValue> {
        if let Some(hit) = self.store.get(text) {
            return Some(hit);
        }

        match codec::parse(text) {
            Ok(value) => Some(self.store.cache(value)),
            Err(err) => {
                debug!(error = %err, "discarding malformed JSON input");
                None
            }
        }
    }

    // == Register ==
    /// Caches a computed value and returns its key.
    fn register(&mut self, value: Value) -> String {
        self.store.cache(value).key
    }

    /// Drops the entry for `key` ahead of a mutation that changes its content.
    fn invalidate(&mut self, key: &str) {
        self.store.remove(key);
    }
}
