//! Client configuration.
//!
//! Holds the two origins this layer talks to: the PokéHub backend and the
//! public PokeAPI. Values come from the environment (a `.env` file is loaded
//! if present) and fall back to the development defaults.

use std::env;

/// Default backend origin (the local dev server).
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Third-party Pokemon data API.
const DEFAULT_POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub pokeapi_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pokeapi_url: DEFAULT_POKEAPI_URL.to_string(),
        }
    }
}

impl Config {
    /// Build a config from `POKEHUB_BASE_URL` / `POKEHUB_POKEAPI_URL`,
    /// loading `.env` first (silently ignored if not found).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        Self {
            base_url: env::var("POKEHUB_BASE_URL").unwrap_or(defaults.base_url),
            pokeapi_url: env::var("POKEHUB_POKEAPI_URL").unwrap_or(defaults.pokeapi_url),
        }
    }

    /// Root of the backend REST API.
    pub fn api_url(&self) -> String {
        format!("{}/api", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_appends_api_segment() {
        let config = Config {
            base_url: "http://localhost:3000".to_string(),
            pokeapi_url: DEFAULT_POKEAPI_URL.to_string(),
        };
        assert_eq!(config.api_url(), "http://localhost:3000/api");
    }

    #[test]
    fn test_default_points_at_dev_server() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.pokeapi_url, "https://pokeapi.co/api/v2");
    }
}
