//! DTOs for API requests and responses.
//!
//! The wire contract is camelCase JSON, matching the browser callers this
//! service fronts.

use glaze_core::types::GenerationOutcome;
use serde::{Deserialize, Serialize};

/// Request to generate (or fetch a cached) asset.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateAssetRequest {
    /// Text prompt; required, validated in the handler so the error body
    /// stays consistent with the rest of the API
    pub prompt: Option<String>,
    /// Asset width in pixels (default 512)
    pub width: Option<u32>,
    /// Asset height in pixels (default 512)
    pub height: Option<u32>,
    /// Caller-supplied cache key, honored verbatim
    pub cache_key: Option<String>,
    /// Diffusion steps, forwarded opaquely (default 30)
    pub steps: Option<u32>,
    /// Seed, forwarded opaquely
    pub seed: Option<u64>,
}

/// Response for asset generation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAssetResponse {
    /// URL of the generated asset
    pub image_url: String,
    /// Asset format tag (e.g. "png")
    pub format: String,
    /// True if served from cache without a provider call
    pub cached: bool,
    /// The resolved cache key (echoed or system-generated)
    pub cache_key: String,
    /// Provider call duration in milliseconds; 0 on cache hit
    pub generation_time: u64,
    /// Truncated echo of the request prompt
    pub prompt: String,
}

impl From<GenerationOutcome> for GenerateAssetResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        Self {
            image_url: outcome.asset.url,
            format: outcome.asset.format,
            cached: outcome.cached,
            cache_key: outcome.cache_key,
            generation_time: outcome.generation_time_ms,
            prompt: outcome.prompt,
        }
    }
}

/// Response for the cache stats endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatsResponse {
    /// Resident entry count
    pub entries: usize,
    /// Configured capacity bound
    pub capacity: usize,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Seconds since first health probe
    pub uptime_seconds: u64,
    /// Resident cached assets
    pub cached_assets: usize,
    /// Cache capacity bound
    pub cache_capacity: usize,
    /// Active provider name
    pub provider: String,
}
