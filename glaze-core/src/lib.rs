//! # Glaze Core
//!
//! Core types, errors, and traits for the Glaze asset-generation caching proxy.
//!
//! This crate provides the foundational building blocks used by all other Glaze crates:
//!
//! - **Types**: Generation requests, generated assets, and outcomes
//! - **Errors**: Comprehensive error types with context
//! - **Constants**: Defaults for dimensions, steps, and cache capacity
//! - **Traits**: The `AssetProvider` interface for pluggable backends
//!
//! ## Example
//!
//! ```rust
//! use glaze_core::GenerationRequest;
//!
//! let request = GenerationRequest::new("a lighthouse at dusk");
//! assert_eq!(request.width, glaze_core::DEFAULT_WIDTH);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{GlazeError, Result};
pub use traits::*;
pub use types::*;
