//! Deterministic placeholder provider.
//!
//! Produces a placeholder URL derived from the request instead of calling a
//! real backend. Useful for development and as the default provider when no
//! backend is configured.

use async_trait::async_trait;
use tracing::debug;

use glaze_core::error::Result;
use glaze_core::traits::AssetProvider;
use glaze_core::types::{GeneratedAsset, GenerationRequest};

const PLACEHOLDER_BASE: &str = "https://placeholder.example/assets";

/// Maximum prompt characters embedded in the placeholder URL.
const PROMPT_SLUG_CHARS: usize = 50;

/// Provider that fabricates placeholder asset URLs without network I/O.
pub struct PlaceholderProvider {
    base_url: String,
}

impl PlaceholderProvider {
    /// Creates a placeholder provider with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: PLACEHOLDER_BASE.into(),
        }
    }

    /// Creates a placeholder provider with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for PlaceholderProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetProvider for PlaceholderProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedAsset> {
        let slug: String = request.prompt.chars().take(PROMPT_SLUG_CHARS).collect();
        let encoded: String = url::form_urlencoded::byte_serialize(slug.as_bytes()).collect();

        let asset_url = format!(
            "{}/{}x{}?text={}",
            self.base_url.trim_end_matches('/'),
            request.width,
            request.height,
            encoded
        );

        debug!(url = %asset_url, "Generated placeholder asset");
        Ok(GeneratedAsset::new(asset_url, "png"))
    }

    fn name(&self) -> &str {
        "placeholder"
    }
}
