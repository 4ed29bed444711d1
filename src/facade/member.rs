//! Member access and mutation.
//!
//! Arrays and strings are addressed by integer index, objects by key.
//! Mutations never edit a cached value in place: the entry under the old
//! key is dropped first, since its content address is about to change, and
//! the mutated copy is registered under its new key.

use serde_json::Value;
use tracing::debug;

use super::index::array_index;
use super::{JsonFacade, MAX_ARRAY_LENGTH};
use crate::cache::CachedValue;
use crate::codec::{self, MAX_DEPTH};

impl JsonFacade {
    // == Get Member ==
    /// Returns the key of member `member` of `text`.
    ///
    /// Missing members, bad indices and absent keys produce `null`. Scalars
    /// have no members and come back unchanged.
    pub fn get_member(&mut self, text: &str, member: &str) -> Option<String> {
        let resolved = self.resolve(text)?;
        let found = match &resolved.value {
            Value::Array(items) => array_index(member).and_then(|i| items.get(i)).cloned(),
            Value::String(s) => array_index(member)
                .and_then(|i| s.chars().nth(i))
                .map(|c| Value::String(c.to_string())),
            Value::Object(map) => map.get(member).cloned(),
            Value::Null | Value::Bool(_) | Value::Number(_) => return Some(resolved.key),
        };
        Some(self.register(found.unwrap_or(Value::Null)))
    }

    // == Set Member ==
    /// Sets member `member` of `text` to the value of `new_value`.
    ///
    /// Writing past the end of an array fills the gap with `null`. A negative
    /// or non-numeric index, a scalar target, or a result nested deeper than
    /// [`MAX_DEPTH`] leaves the value unchanged. Returns `None` if either text
    /// is malformed.
    pub fn set_member(&mut self, text: &str, member: &str, new_value: &str) -> Option<String> {
        let CachedValue { key, value } = self.resolve(text)?;
        let updated = match value {
            Value::Array(mut items) => {
                let Some(index) = array_index(member).filter(|&i| i < MAX_ARRAY_LENGTH) else {
                    return Some(key);
                };
                let replacement = self.resolve(new_value)?.value;

                if index >= items.len() {
                    items.resize(index + 1, Value::Null);
                }
                items[index] = replacement;
                Value::Array(items)
            }
            Value::Object(mut map) => {
                let replacement = self.resolve(new_value)?.value;

                map.insert(member.to_string(), replacement);
                Value::Object(map)
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => return Some(key),
        };

        // Its own key could never be resolved again.
        if codec::depth(&updated) > MAX_DEPTH {
            debug!(key = %key, "set_member result too deeply nested, value unchanged");
            return Some(key);
        }

        self.invalidate(&key);
        Some(self.register(updated))
    }

    // == Remove Member ==
    /// Removes member `member` of `text`.
    ///
    /// On arrays the first and last elements are dropped outright; any
    /// index in between is overwritten with `null` so the positions of all
    /// other elements stay put. The old entry is invalidated and the result
    /// re-registered even when nothing was removed.
    pub fn remove_member(&mut self, text: &str, member: &str) -> Option<String> {
        let CachedValue { key, value } = self.resolve(text)?;
        match value {
            Value::Array(mut items) => {
                self.invalidate(&key);

                if let Some(index) = array_index(member).filter(|&i| i < items.len()) {
                    if index == 0 {
                        items.remove(0);
                    } else if index == items.len() - 1 {
                        items.pop();
                    } else {
                        items[index] = Value::Null;
                    }
                }
                Some(self.register(Value::Array(items)))
            }
            Value::Object(mut map) => {
                self.invalidate(&key);

                map.shift_remove(member);
                Some(self.register(Value::Object(map)))
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Some(key),
        }
    }

    // == Exists ==
    /// Whether `member` addresses something in `text`.
    pub fn exists(&mut self, text: &str, member: &str) -> bool {
        let Some(resolved) = self.resolve(text) else {
            return false;
        };
        match &resolved.value {
            Value::Array(items) => array_index(member).is_some_and(|i| i < items.len()),
            Value::String(s) => array_index(member).is_some_and(|i| i < s.chars().count()),
            Value::Object(map) => map.contains_key(member),
            Value::Null | Value::Bool(_) | Value::Number(_) => false,
        }
    }
}
