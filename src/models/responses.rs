//! Response DTOs for the JSON cache API
//!
//! Defines the structure of outgoing HTTP response bodies. A `null`
//! `result` is the "no result" sentinel the host renders as an empty value.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::facade::JsonType;

/// Response body for operations returning JSON text or display text
#[derive(Debug, Clone, Serialize)]
pub struct TextResponse {
    pub result: Option<String>,
}

impl TextResponse {
    pub fn new(result: Option<String>) -> Self {
        Self { result }
    }
}

/// Response body for `/as-boolean` and `/member/exists`
#[derive(Debug, Clone, Serialize)]
pub struct BoolResponse {
    pub result: bool,
}

impl BoolResponse {
    pub fn new(result: bool) -> Self {
        Self { result }
    }
}

/// Response body for `/type`
#[derive(Debug, Clone, Serialize)]
pub struct TypeResponse {
    pub result: Option<JsonType>,
}

impl TypeResponse {
    pub fn new(result: Option<JsonType>) -> Self {
        Self { result }
    }
}

/// Response body for `/length`
#[derive(Debug, Clone, Serialize)]
pub struct LengthResponse {
    pub result: Option<usize>,
}

impl LengthResponse {
    pub fn new(result: Option<usize>) -> Self {
        Self { result }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries dropped by the aging sweep
    pub evictions: u64,
    /// Number of entries dropped ahead of a mutation
    pub invalidations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Configured entry lifetime in store operations
    pub ttl: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, ttl: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for request-level failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_response_sentinel_is_null() {
        let json = serde_json::to_string(&TextResponse::new(None)).unwrap();
        assert_eq!(json, r#"{"result":null}"#);
    }

    #[test]
    fn test_text_response_serialize() {
        let json = serde_json::to_string(&TextResponse::new(Some("[1]".to_string()))).unwrap();
        assert_eq!(json, r#"{"result":"[1]"}"#);
    }

    #[test]
    fn test_type_response_serialize() {
        let json = serde_json::to_string(&TypeResponse::new(Some(JsonType::Array))).unwrap();
        assert_eq!(json, r#"{"result":"array"}"#);
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            invalidations: 2,
            total_entries: 100,
        };
        let resp = StatsResponse::new(&stats, 64);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.ttl, 64);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Something went wrong"));
    }
}
