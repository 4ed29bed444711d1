//! API Module
//!
//! HTTP handlers and routing that expose the JSON facade to a host runtime.
//! Request and response bodies carry JSON text as plain strings.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
