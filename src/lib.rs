//! JSON Cache - text-addressed JSON accessors over a content-addressed cache
//!
//! Inspects and mutates JSON values given as text. Parsed values are cached
//! under their canonical serialization and age out after a fixed number of
//! cache operations without use.

pub mod api;
pub mod cache;
pub mod codec;
pub mod config;
pub mod error;
pub mod facade;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use facade::{JsonFacade, JsonType};
