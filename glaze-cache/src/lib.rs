//! # Glaze Cache
//!
//! Bounded in-memory cache for generated assets.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

mod cache;

pub use cache::{AssetCache, CacheConfig, CacheStats};
