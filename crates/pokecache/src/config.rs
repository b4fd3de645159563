use std::{env, time::Duration};

use pokecache_core::catalog::DEFAULT_LIMIT;

/// Base URL of the public PokeAPI.
pub const DEFAULT_POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream base URL without trailing slash (default: "https://pokeapi.co/api/v2")
    pub pokeapi_url: String,
    /// Per-call upstream timeout in seconds (default: 10)
    pub upstream_timeout_seconds: u64,
    /// Page size used when a list request omits the limit (default: 10)
    pub default_page_limit: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEAPI_URL` - Upstream base URL (default: "https://pokeapi.co/api/v2")
    /// - `UPSTREAM_TIMEOUT_SECONDS` - Per-call upstream timeout (default: 10)
    /// - `DEFAULT_PAGE_LIMIT` - Default page size (default: 10)
    pub fn from_env() -> Self {
        Self {
            pokeapi_url: env::var("POKEAPI_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_POKEAPI_URL.to_string()),
            upstream_timeout_seconds: env::var("UPSTREAM_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            default_page_limit: env::var("DEFAULT_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Get the upstream timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_timeout_conversion() {
        let config = Config {
            pokeapi_url: DEFAULT_POKEAPI_URL.to_string(),
            upstream_timeout_seconds: 3,
            default_page_limit: 10,
        };

        assert_eq!(config.upstream_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("POKEAPI_URL");
        env::remove_var("UPSTREAM_TIMEOUT_SECONDS");
        env::remove_var("DEFAULT_PAGE_LIMIT");

        let config = Config::from_env();

        assert_eq!(config.pokeapi_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.upstream_timeout_seconds, 10);
        assert_eq!(config.default_page_limit, 10);
    }
}
