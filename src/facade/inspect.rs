//! Read-only queries: display text, truthiness, type, length, keys and values.

use serde_json::Value;

use super::{JsonFacade, JsonType};

impl JsonFacade {
    // == As Display String ==
    /// Renders a value as plain text.
    ///
    /// Scalars render as their literal text (strings without quotes);
    /// arrays and objects render as their canonical serialization.
    pub fn as_display_string(&mut self, text: &str) -> Option<String> {
        let resolved = self.resolve(text)?;
        match resolved.value {
            Value::String(s) => Some(s),
            _ => Some(resolved.key),
        }
    }

    // == As Boolean ==
    /// Truthiness of a value. Malformed input is `false`.
    pub fn as_boolean(&mut self, text: &str) -> bool {
        let Some(resolved) = self.resolve(text) else {
            return false;
        };
        match &resolved.value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }

    // == Classify ==
    pub fn classify(&mut self, text: &str) -> Option<JsonType> {
        self.resolve(text)
            .map(|resolved| JsonType::of(&resolved.value))
    }

    // == Length ==
    /// Element count of an array, character count of a string, key count of
    /// an object. Scalars have no length.
    pub fn length(&mut self, text: &str) -> Option<usize> {
        match self.resolve(text)?.value {
            Value::Array(items) => Some(items.len()),
            Value::String(s) => Some(s.chars().count()),
            Value::Object(map) => Some(map.len()),
            Value::Null | Value::Bool(_) | Value::Number(_) => None,
        }
    }

    // == Keys ==
    /// Keys of an object (or character positions of a string) as a new
    /// registered array. Every other shape yields `[]`.
    pub fn keys(&mut self, text: &str) -> Option<String> {
        let keys = match self.resolve(text)?.value {
            Value::Object(map) => map.into_iter().map(|(k, _)| Value::String(k)).collect(),
            Value::String(s) => (0..s.chars().count())
                .map(|i| Value::String(i.to_string()))
                .collect(),
            _ => Vec::new(),
        };
        Some(self.register(Value::Array(keys)))
    }

    // == Values ==
    /// Values of an object (or characters of a string) as a new registered
    /// array. Every other shape yields `[]`.
    pub fn values(&mut self, text: &str) -> Option<String> {
        let values = match self.resolve(text)?.value {
            Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
            Value::String(s) => s.chars().map(|c| Value::String(c.to_string())).collect(),
            _ => Vec::new(),
        };
        Some(self.register(Value::Array(values)))
    }
}
