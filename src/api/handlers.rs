//! API Handlers
//!
//! HTTP request handlers, one per facade operation.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};

use crate::config::Config;
use crate::error::{JsonCacheError, Result};
use crate::facade::JsonFacade;
use crate::models::{
    BoolResponse, FromStringRequest, HealthResponse, InputSize, JsonRequest, LengthResponse,
    MemberRequest, SetMemberRequest, StatsResponse, TextResponse, TypeResponse,
};

/// Application state shared across all handlers.
///
/// Every facade call takes the write lock, since even lookups age and touch
/// cache entries. Operations are therefore applied one at a time.
#[derive(Clone)]
pub struct AppState {
    /// The single facade instance and the store it owns
    pub facade: Arc<RwLock<JsonFacade>>,
    /// Maximum size in bytes of any text field in a request
    pub max_input_size: usize,
}

impl AppState {
    /// Creates a new AppState around the given facade.
    pub fn new(facade: JsonFacade, max_input_size: usize) -> Self {
        Self {
            facade: Arc::new(RwLock::new(facade)),
            max_input_size,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// Returns `TtlConfig` if the configured ttl is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let facade = JsonFacade::with_ttl(config.cache_ttl)?;
        Ok(Self::new(facade, config.max_input_size))
    }
}

/// Rejects requests whose text fields exceed the configured limit.
fn check_size(req: &impl InputSize, limit: usize) -> Result<()> {
    let size = req.largest_field();
    if size > limit {
        return Err(JsonCacheError::InputTooLarge { size, limit });
    }
    Ok(())
}

/// Handler for POST /parse
pub async fn parse_handler(
    State(state): State<AppState>,
    Json(req): Json<JsonRequest>,
) -> Result<Json<TextResponse>> {
    check_size(&req, state.max_input_size)?;
    let mut facade = state.facade.write().await;
    Ok(Json(TextResponse::new(facade.parse(&req.json))))
}

/// Handler for POST /from-string
pub async fn from_string_handler(
    State(state): State<AppState>,
    Json(req): Json<FromStringRequest>,
) -> Result<Json<TextResponse>> {
    check_size(&req, state.max_input_size)?;
    let mut facade = state.facade.write().await;
    Ok(Json(TextResponse::new(Some(facade.from_string(&req.text)))))
}

/// Handler for POST /as-string
pub async fn as_string_handler(
    State(state): State<AppState>,
    Json(req): Json<JsonRequest>,
) -> Result<Json<TextResponse>> {
    check_size(&req, state.max_input_size)?;
    let mut facade = state.facade.write().await;
    Ok(Json(TextResponse::new(facade.as_display_string(&req.json))))
}

/// Handler for POST /as-boolean
pub async fn as_boolean_handler(
    State(state): State<AppState>,
    Json(req): Json<JsonRequest>,
) -> Result<Json<BoolResponse>> {
    check_size(&req, state.max_input_size)?;
    let mut facade = state.facade.write().await;
    Ok(Json(BoolResponse::new(facade.as_boolean(&req.json))))
}

/// Handler for POST /type
pub async fn type_handler(
    State(state): State<AppState>,
    Json(req): Json<JsonRequest>,
) -> Result<Json<TypeResponse>> {
    check_size(&req, state.max_input_size)?;
    let mut facade = state.facade.write().await;
    Ok(Json(TypeResponse::new(facade.classify(&req.json))))
}

/// Handler for POST /member/get
pub async fn get_member_handler(
    State(state): State<AppState>,
    Json(req): Json<MemberRequest>,
) -> Result<Json<TextResponse>> {
    check_size(&req, state.max_input_size)?;
    let mut facade = state.facade.write().await;
    Ok(Json(TextResponse::new(facade.get_member(&req.json, &req.member))))
}

/// Handler for POST /member/set
pub async fn set_member_handler(
    State(state): State<AppState>,
    Json(req): Json<SetMemberRequest>,
) -> Result<Json<TextResponse>> {
    check_size(&req, state.max_input_size)?;
    let mut facade = state.facade.write().await;
    let result = facade.set_member(&req.json, &req.member, &req.value);
    Ok(Json(TextResponse::new(result)))
}

/// Handler for POST /member/remove
pub async fn remove_member_handler(
    State(state): State<AppState>,
    Json(req): Json<MemberRequest>,
) -> Result<Json<TextResponse>> {
    check_size(&req, state.max_input_size)?;
    let mut facade = state.facade.write().await;
    Ok(Json(TextResponse::new(facade.remove_member(&req.json, &req.member))))
}

/// Handler for POST /member/exists
pub async fn exists_handler(
    State(state): State<AppState>,
    Json(req): Json<MemberRequest>,
) -> Result<Json<BoolResponse>> {
    check_size(&req, state.max_input_size)?;
    let mut facade = state.facade.write().await;
    Ok(Json(BoolResponse::new(facade.exists(&req.json, &req.member))))
}

/// Handler for POST /length
pub async fn length_handler(
    State(state): State<AppState>,
    Json(req): Json<JsonRequest>,
) -> Result<Json<LengthResponse>> {
    check_size(&req, state.max_input_size)?;
    let mut facade = state.facade.write().await;
    Ok(Json(LengthResponse::new(facade.length(&req.json))))
}

/// Handler for POST /keys
pub async fn keys_handler(
    State(state): State<AppState>,
    Json(req): Json<JsonRequest>,
) -> Result<Json<TextResponse>> {
    check_size(&req, state.max_input_size)?;
    let mut facade = state.facade.write().await;
    Ok(Json(TextResponse::new(facade.keys(&req.json))))
}

/// Handler for POST /values
pub async fn values_handler(
    State(state): State<AppState>,
    Json(req): Json<JsonRequest>,
) -> Result<Json<TextResponse>> {
    check_size(&req, state.max_input_size)?;
    let mut facade = state.facade.write().await;
    Ok(Json(TextResponse::new(facade.values(&req.json))))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Read lock is enough: stats neither age nor touch entries
    let facade = state.facade.read().await;
    Json(StatsResponse::new(&facade.stats(), facade.ttl()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(JsonFacade::with_ttl(16).unwrap(), 1024)
    }

    fn json_req(json: &str) -> Json<JsonRequest> {
        Json(JsonRequest {
            json: json.to_string(),
        })
    }

    #[tokio::test]
    async fn test_parse_handler() {
        let state = test_state();

        let response = parse_handler(State(state), json_req("{ \"a\" : 1 }"))
            .await
            .unwrap();
        assert_eq!(response.result.as_deref(), Some(r#"{"a":1}"#));
    }

    #[tokio::test]
    async fn test_parse_handler_malformed_is_sentinel() {
        let state = test_state();

        let response = parse_handler(State(state), json_req("{invalid"))
            .await
            .unwrap();
        assert!(response.result.is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_member_handlers() {
        let state = test_state();

        let req = SetMemberRequest {
            json: r#"{"a":1}"#.to_string(),
            member: "a".to_string(),
            value: "2".to_string(),
        };
        let updated = set_member_handler(State(state.clone()), Json(req))
            .await
            .unwrap()
            .result
            .clone()
            .unwrap();

        let req = MemberRequest {
            json: updated,
            member: "a".to_string(),
        };
        let response = get_member_handler(State(state), Json(req)).await.unwrap();
        assert_eq!(response.result.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_oversized_input_rejected() {
        let state = AppState::new(JsonFacade::with_ttl(16).unwrap(), 4);

        let result = length_handler(State(state), json_req("[1,2,3]")).await;
        assert!(matches!(
            result,
            Err(JsonCacheError::InputTooLarge { size: 7, limit: 4 })
        ));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();
        as_boolean_handler(State(state.clone()), json_req("[1]"))
            .await
            .unwrap();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.total_entries, 1);
        assert_eq!(response.ttl, 16);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_from_config_rejects_zero_ttl() {
        let config = Config {
            cache_ttl: 0,
            ..Config::default()
        };
        assert!(matches!(
            AppState::from_config(&config),
            Err(JsonCacheError::TtlConfig(_))
        ));
    }
}
