//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

use crate::error::{JsonCacheError, Result};

/// Default number of store operations an untouched entry survives
pub const DEFAULT_CACHE_TTL: u64 = 64;

/// Default per-field input limit in bytes
pub const DEFAULT_MAX_INPUT_SIZE: usize = 1024 * 1024; // 1 MB

/// Service configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lifetime of a cache entry, counted in store operations
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum size in bytes of any JSON text field in a request
    pub max_input_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Entry lifetime in store operations (default: 64)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MAX_INPUT_SIZE` - Per-field input limit in bytes (default: 1 MB)
    ///
    /// A `CACHE_TTL` that is set but not an unsigned integer is rejected rather
    /// than silently replaced by the default. Positivity is checked when the
    /// store is built.
    pub fn from_env() -> Result<Self> {
        let cache_ttl = match env::var("CACHE_TTL") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                JsonCacheError::TtlConfig(format!("CACHE_TTL must be a positive integer, got {:?}", raw))
            })?,
            Err(_) => DEFAULT_CACHE_TTL,
        };

        Ok(Self {
            cache_ttl,
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            max_input_size: env::var("MAX_INPUT_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_INPUT_SIZE),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            server_port: 3000,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}
