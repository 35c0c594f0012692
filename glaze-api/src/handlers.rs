//! API route handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use rand::RngCore;
use tracing::{debug, info};

use glaze_core::types::{GenerationOutcome, GenerationRequest};
use glaze_core::{CACHE_KEY_PREFIX, CACHE_KEY_TOKEN_BYTES};

use crate::dto::*;
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// Generates a fresh value-independent cache key.
///
/// Deliberately not a content hash: callers that want deterministic keys
/// compute their own and pass them in; an omitted key means "this request
/// is one of a kind".
fn fresh_cache_key() -> String {
    let mut token = [0u8; CACHE_KEY_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut token);
    format!("{}{}", CACHE_KEY_PREFIX, hex::encode(token))
}

/// POST /api/v1/assets/generate
pub async fn generate_asset(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateAssetRequest>,
) -> Result<Json<GenerateAssetResponse>> {
    let prompt = req.prompt.unwrap_or_default();

    let mut generation = GenerationRequest::new(prompt).with_size(
        req.width.unwrap_or(glaze_core::DEFAULT_WIDTH),
        req.height.unwrap_or(glaze_core::DEFAULT_HEIGHT),
    );
    if let Some(steps) = req.steps {
        generation.steps = steps;
    }
    generation.seed = req.seed;

    generation.validate().map_err(ApiError::from)?;

    // An explicit empty key counts as omitted, matching caller expectations.
    let cache_key = req
        .cache_key
        .filter(|k| !k.is_empty())
        .unwrap_or_else(fresh_cache_key);

    // Cache hit short-circuits generation entirely.
    if let Some(asset) = state.cache.get(&cache_key) {
        debug!(cache_key = %cache_key, "Cache hit");
        let outcome = GenerationOutcome {
            asset,
            cached: true,
            cache_key,
            generation_time_ms: 0,
            prompt: generation.prompt_echo(),
        };
        return Ok(Json(outcome.into()));
    }

    let start = Instant::now();
    let asset = state
        .provider
        .generate(&generation)
        .await
        .map_err(ApiError::from)?;
    let generation_time = start.elapsed().as_millis() as u64;

    // Only successful generations reach the cache; a provider failure above
    // leaves no trace, so an identical retry generates again.
    state.cache.insert(&cache_key, asset.clone());

    info!(
        cache_key = %cache_key,
        generation_time_ms = generation_time,
        provider = state.provider.name(),
        "Generated asset"
    );

    let outcome = GenerationOutcome {
        asset,
        cached: false,
        cache_key,
        generation_time_ms: generation_time,
        prompt: generation.prompt_echo(),
    };
    Ok(Json(outcome.into()))
}

/// Fallback for unsupported methods on the generate route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// GET /api/v1/assets/cache/stats
pub async fn cache_stats(State(state): State<Arc<AppState>>) -> Json<CacheStatsResponse> {
    let stats = state.cache.stats();
    Json(CacheStatsResponse {
        entries: stats.total_entries,
        capacity: stats.capacity,
    })
}

static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let start = START_TIME.get_or_init(Instant::now);
    let uptime = start.elapsed().as_secs();

    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: uptime,
        cached_assets: state.cache.len(),
        cache_capacity: state.cache.capacity(),
        provider: state.provider.name().into(),
    })
}
