//! # Glaze Provider
//!
//! Implementations of the [`AssetProvider`](glaze_core::AssetProvider) trait:
//!
//! - [`HttpProvider`] — proxies generation to a hosted HTTP inference backend
//! - [`PlaceholderProvider`] — deterministic placeholder URLs, no network

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

mod http;
mod placeholder;

pub use http::{HttpProvider, HttpProviderConfig};
pub use placeholder::PlaceholderProvider;
