//! API route configuration.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Generation (non-POST verbs get a JSON 405 body)
        .route(
            "/api/v1/assets/generate",
            post(handlers::generate_asset).fallback(handlers::method_not_allowed),
        )
        // Cache introspection
        .route("/api/v1/assets/cache/stats", get(handlers::cache_stats))
        .with_state(state)
}
