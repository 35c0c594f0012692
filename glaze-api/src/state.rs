//! App state: cache, provider, config.

use glaze_cache::AssetCache;
use glaze_core::traits::AssetProvider;
use glaze_core::DEFAULT_CACHE_CAPACITY;
use glaze_provider::{HttpProvider, HttpProviderConfig, PlaceholderProvider};

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub provider_url: Option<String>,
    pub provider_api_key: Option<String>,
    pub cache_capacity: usize,
    pub request_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            provider_url: None,
            provider_api_key: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            request_timeout_seconds: 60,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            provider_url: std::env::var("GLAZE_PROVIDER_URL").ok(),
            provider_api_key: std::env::var("GLAZE_PROVIDER_API_KEY").ok(),
            cache_capacity: std::env::var("GLAZE_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_CAPACITY),
            request_timeout_seconds: std::env::var("GLAZE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

pub struct AppState {
    pub config: ApiConfig,
    pub cache: AssetCache,
    pub provider: Box<dyn AssetProvider>,
}

impl AppState {
    /// Builds state from config, selecting the HTTP provider when a backend
    /// URL is configured and the placeholder provider otherwise.
    pub fn new(config: ApiConfig) -> Self {
        let provider: Box<dyn AssetProvider> = match &config.provider_url {
            Some(url) => {
                let mut provider_config = HttpProviderConfig::new(url.as_str());
                provider_config.timeout_seconds = config.request_timeout_seconds;
                if let Some(key) = &config.provider_api_key {
                    provider_config = provider_config.with_api_key(key.as_str());
                }
                match HttpProvider::with_config(provider_config) {
                    Ok(p) => Box::new(p),
                    Err(e) => {
                        tracing::warn!(error = %e, "HTTP provider setup failed, using placeholder");
                        Box::new(PlaceholderProvider::new())
                    }
                }
            }
            None => Box::new(PlaceholderProvider::new()),
        };

        Self::with_provider(config, provider)
    }

    /// Builds state with an injected provider (used by tests).
    pub fn with_provider(config: ApiConfig, provider: Box<dyn AssetProvider>) -> Self {
        let cache = AssetCache::with_capacity(config.cache_capacity);
        Self {
            config,
            cache,
            provider,
        }
    }
}
