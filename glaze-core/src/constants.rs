//! Constants and defaults for Glaze.

/// Default asset width in pixels when the request omits one.
pub const DEFAULT_WIDTH: u32 = 512;

/// Default asset height in pixels when the request omits one.
pub const DEFAULT_HEIGHT: u32 = 512;

/// Default number of diffusion steps passed through to the provider.
pub const DEFAULT_STEPS: u32 = 30;

/// Default maximum number of cached assets.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Prefix for system-generated cache keys.
pub const CACHE_KEY_PREFIX: &str = "asset_";

/// Number of random bytes in a system-generated cache key token.
pub const CACHE_KEY_TOKEN_BYTES: usize = 8;

/// Maximum prompt length echoed back in responses before truncation.
pub const PROMPT_ECHO_MAX_CHARS: usize = 200;
