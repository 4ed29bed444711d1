//! API Routes
//!
//! Configures the Axum router with one endpoint per facade operation.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    as_boolean_handler, as_string_handler, exists_handler, from_string_handler,
    get_member_handler, health_handler, keys_handler, length_handler, parse_handler,
    remove_member_handler, set_member_handler, stats_handler, type_handler, values_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /parse`, `POST /from-string` - Canonicalize text
/// - `POST /as-string`, `POST /as-boolean`, `POST /type` - Type queries
/// - `POST /member/{get,set,remove,exists}` - Member access and mutation
/// - `POST /length`, `POST /keys`, `POST /values` - Container queries
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Body limit: sized so a request at the input limit still fits once its
///   text fields are JSON-escaped
/// - CORS: Allows any origin (the host runtime may run in a browser)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_input_size.saturating_mul(6).saturating_add(4096);

    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/parse", post(parse_handler))
        .route("/from-string", post(from_string_handler))
        .route("/as-string", post(as_string_handler))
        .route("/as-boolean", post(as_boolean_handler))
        .route("/type", post(type_handler))
        .route("/member/get", post(get_member_handler))
        .route("/member/set", post(set_member_handler))
        .route("/member/remove", post(remove_member_handler))
        .route("/member/exists", post(exists_handler))
        .route("/length", post(length_handler))
        .route("/keys", post(keys_handler))
        .route("/values", post(values_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
