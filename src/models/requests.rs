//! Request DTOs for the JSON cache API
//!
//! Defines the structure of incoming HTTP request bodies. Every text field
//! carries JSON text exactly as the host runtime holds it.

use serde::Deserialize;

/// Request body for single-value operations
/// (`/parse`, `/as-string`, `/as-boolean`, `/type`, `/length`, `/keys`, `/values`)
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRequest {
    /// JSON text to operate on
    pub json: String,
}

/// Request body for `/from-string`
#[derive(Debug, Clone, Deserialize)]
pub struct FromStringRequest {
    /// Arbitrary text to wrap as a JSON string
    #[serde(rename = "str")]
    pub text: String,
}

/// Request body for `/member/get`, `/member/remove` and `/member/exists`
#[derive(Debug, Clone, Deserialize)]
pub struct MemberRequest {
    /// JSON text to operate on
    pub json: String,
    /// Object key or array/string index
    pub member: String,
}

/// Request body for `/member/set`
#[derive(Debug, Clone, Deserialize)]
pub struct SetMemberRequest {
    /// JSON text to operate on
    pub json: String,
    /// Object key or array index
    pub member: String,
    /// JSON text of the new member value
    pub value: String,
}

// == Input Size ==
/// Size of the largest text field in a request, checked against the
/// configured input limit before any work is done.
pub trait InputSize {
    fn largest_field(&self) -> usize;
}

impl InputSize for JsonRequest {
    fn largest_field(&self) -> usize {
        self.json.len()
    }
}

impl InputSize for FromStringRequest {
    fn largest_field(&self) -> usize {
        self.text.len()
    }
}

impl InputSize for MemberRequest {
    fn largest_field(&self) -> usize {
        self.json.len().max(self.member.len())
    }
}

impl InputSize for SetMemberRequest {
    fn largest_field(&self) -> usize {
        self.json.len().max(self.member.len()).max(self.value.len())
    }
}
