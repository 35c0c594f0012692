//! Common traits for Glaze.
//!
//! These traits define the interfaces that different implementations can satisfy,
//! enabling modularity and testing.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{GeneratedAsset, GenerationRequest};

/// Interface to an external asset-generation backend.
///
/// Implementations might use:
/// - A hosted HTTP inference API (Replicate, Hugging Face, a custom model)
/// - A deterministic placeholder service (for development/testing)
///
/// Providers receive the full request but must treat `steps` and `seed` as
/// opaque pass-through parameters. The cache key is resolved by the caller
/// and is of no concern to a provider.
#[async_trait]
pub trait AssetProvider: Send + Sync {
    /// Generates an asset for the given request.
    ///
    /// The call suspends on network I/O and may fail; Glaze performs no
    /// retries on top of it.
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedAsset>;

    /// Human-readable provider name, used in logs.
    fn name(&self) -> &str;
}
