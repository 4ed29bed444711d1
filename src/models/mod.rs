//! Request and Response models for the JSON cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{FromStringRequest, InputSize, JsonRequest, MemberRequest, SetMemberRequest};
pub use responses::{
    BoolResponse, ErrorResponse, HealthResponse, LengthResponse, StatsResponse, TextResponse,
    TypeResponse,
};
