//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL and sweep period in milliseconds
    pub cache_interval_ms: u64,
    /// Root URL of the catalog API, without trailing slash
    pub api_base_url: String,
    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,
    /// Exclusive upper bound of the catch roll
    pub catch_difficulty: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL_MS` - Cache TTL in milliseconds (default: 20000)
    /// - `POKEDEX_API_BASE_URL` - Catalog API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    /// - `POKEDEX_CATCH_DIFFICULTY` - Catch roll upper bound (default: 608)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval_ms: env::var("POKEDEX_CACHE_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval_ms),
            api_base_url: env::var("POKEDEX_API_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            http_timeout_secs: env::var("POKEDEX_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout_secs),
            catch_difficulty: env::var("POKEDEX_CATCH_DIFFICULTY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.catch_difficulty),
        }
    }

    /// Cache interval as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }

    /// HTTP timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_ms: 20_000,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout_secs: 10,
            catch_difficulty: 608,
        }
    }
}
