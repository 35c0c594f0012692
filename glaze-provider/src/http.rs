//! HTTP provider for hosted generation backends.
//!
//! Proxies generation requests to a remote inference API (a Replicate- or
//! Hugging Face-style endpoint, or a custom model server) and maps its
//! response into a [`GeneratedAsset`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use glaze_core::error::{GlazeError, Result};
use glaze_core::traits::AssetProvider;
use glaze_core::types::{GeneratedAsset, GenerationRequest};

/// HTTP provider configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpProviderConfig {
    /// Generation endpoint URL (e.g., "https://inference.example/v1/generate")
    pub endpoint_url: String,
    /// Bearer token for the backend (optional)
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for HttpProviderConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "http://localhost:8188/generate".into(),
            api_key: None,
            timeout_seconds: 60,
        }
    }
}

impl HttpProviderConfig {
    /// Creates a config for the given endpoint.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            ..Default::default()
        }
    }

    /// Adds a bearer token.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Request body sent to the backend.
#[derive(Serialize)]
struct BackendRequest<'a> {
    prompt: &'a str,
    width: u32,
    height: u32,
    steps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

/// Response body expected from the backend.
#[derive(Deserialize)]
struct BackendResponse {
    url: String,
    #[serde(default = "default_format")]
    format: String,
}

fn default_format() -> String {
    "png".into()
}

/// Asset provider backed by a remote HTTP inference API.
pub struct HttpProvider {
    config: HttpProviderConfig,
    http_client: reqwest::Client,
}

impl HttpProvider {
    /// Creates a provider for the given endpoint with default settings.
    pub fn new(endpoint_url: impl Into<String>) -> Result<Self> {
        Self::with_config(HttpProviderConfig::new(endpoint_url))
    }

    /// Creates a provider with custom configuration.
    pub fn with_config(config: HttpProviderConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GlazeError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl AssetProvider for HttpProvider {
    #[instrument(skip(self, request), fields(width = request.width, height = request.height))]
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedAsset> {
        let body = BackendRequest {
            prompt: &request.prompt,
            width: request.width,
            height: request.height,
            steps: request.steps,
            seed: request.seed,
        };

        let mut builder = self.http_client.post(&self.config.endpoint_url).json(&body);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GlazeError::ProviderTimeout {
                    seconds: self.config.timeout_seconds,
                }
            } else {
                GlazeError::HttpError(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(GlazeError::GenerationFailed(format!(
                "Backend returned status {}: {}",
                status, text
            )));
        }

        let parsed: BackendResponse = response
            .json()
            .await
            .map_err(|e| GlazeError::UnusableProviderResponse(e.to_string()))?;

        if parsed.url.is_empty() {
            return Err(GlazeError::UnusableProviderResponse(
                "Backend returned an empty asset URL".into(),
            ));
        }

        debug!(url = %parsed.url, format = %parsed.format, "Generated asset via backend");
        Ok(GeneratedAsset::new(parsed.url, parsed.format))
    }

    fn name(&self) -> &str {
        "http"
    }
}
