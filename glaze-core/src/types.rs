//! Domain types for asset generation.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HEIGHT, DEFAULT_STEPS, DEFAULT_WIDTH, PROMPT_ECHO_MAX_CHARS,
};
use crate::error::{GlazeError, Result};

/// A request to generate an asset.
///
/// Width, height, and steps default when omitted; `seed` and `steps` are
/// passed through to the provider opaquely and never interpreted here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Text prompt describing the desired asset.
    pub prompt: String,
    /// Asset width in pixels.
    pub width: u32,
    /// Asset height in pixels.
    pub height: u32,
    /// Diffusion steps, forwarded to the provider.
    pub steps: u32,
    /// Optional seed, forwarded to the provider.
    pub seed: Option<u64>,
    /// Optional caller-supplied cache key, honored verbatim.
    pub cache_key: Option<String>,
}

impl GenerationRequest {
    /// Creates a request with default dimensions and steps.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            steps: DEFAULT_STEPS,
            seed: None,
            cache_key: None,
        }
    }

    /// Sets custom dimensions.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets a seed for reproducible generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an explicit cache key.
    pub fn with_cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = Some(key.into());
        self
    }

    /// Validates the request.
    ///
    /// The prompt must be non-empty after trimming and dimensions must be
    /// positive. The cache key, if any, is opaque and never validated
    /// against the prompt.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(GlazeError::ValidationError("Prompt is required".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(GlazeError::ValidationError(
                "Width and height must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Returns the prompt truncated for response echoes and logs.
    pub fn prompt_echo(&self) -> String {
        truncate_prompt(&self.prompt)
    }
}

/// Truncates a prompt to the echo limit, appending an ellipsis when cut.
pub fn truncate_prompt(prompt: &str) -> String {
    if prompt.chars().count() <= PROMPT_ECHO_MAX_CHARS {
        prompt.to_string()
    } else {
        let truncated: String = prompt.chars().take(PROMPT_ECHO_MAX_CHARS).collect();
        format!("{}...", truncated)
    }
}

/// A generated asset as returned by a provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAsset {
    /// URI or locator for the produced artifact.
    pub url: String,
    /// Artifact format tag (e.g. "png").
    pub format: String,
}

impl GeneratedAsset {
    /// Creates a new generated asset.
    pub fn new(url: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format: format.into(),
        }
    }
}

/// The outcome of a `generate` call, cache metadata included.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// The generated (or cached) asset.
    pub asset: GeneratedAsset,
    /// True if served from cache without invoking the provider.
    pub cached: bool,
    /// The resolved cache key (caller-supplied or system-generated).
    pub cache_key: String,
    /// Provider call duration in milliseconds; 0 on a cache hit.
    pub generation_time_ms: u64,
    /// Truncated echo of the request prompt.
    pub prompt: String,
}
