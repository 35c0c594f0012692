//! Error types for Glaze.
//!
//! This module provides the error hierarchy using `thiserror`.
//! All errors include context and are designed to be actionable.

use thiserror::Error;

/// Result type alias using `GlazeError`.
pub type Result<T> = std::result::Result<T, GlazeError>;

/// Main error type for all Glaze operations.
#[derive(Debug, Error)]
pub enum GlazeError {
    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Input validation failed.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // PROVIDER ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The external generation provider failed.
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// The provider returned a response Glaze could not use.
    #[error("Unusable provider response: {0}")]
    UnusableProviderResponse(String),

    /// Provider request timed out.
    #[error("Provider timeout after {seconds}s")]
    ProviderTimeout {
        /// Configured timeout that elapsed.
        seconds: u64,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // NETWORK ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // INTERNAL
    // ═══════════════════════════════════════════════════════════════════════════

    /// Internal invariant violation (should never happen).
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl GlazeError {
    /// Returns true if this error is a caller error (client-error class).
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            GlazeError::ValidationError(_) | GlazeError::ConfigError(_)
        )
    }

    /// Returns true if this error came from the provider side (server-error class).
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            GlazeError::GenerationFailed(_)
                | GlazeError::UnusableProviderResponse(_)
                | GlazeError::ProviderTimeout { .. }
                | GlazeError::HttpError(_)
        )
    }
}
