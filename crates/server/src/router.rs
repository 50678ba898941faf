use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all endpoints
///
/// Request bodies are unbounded unless the state carries a body limit.
pub fn create_router(state: AppState) -> Router {
    let body_limit = match state.body_limit() {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        // Health check
        .route("/", get(handlers::about))
        .route("/health", get(handlers::about))
        .route("/info", get(handlers::info))
        // Pools
        .route("/pools/update", post(handlers::update_pool))
        .route("/pools/query", post(handlers::query_pool))
        // State and middleware
        .with_state(state)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
}
