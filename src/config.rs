//! Configuration for the tripcast service
//!
//! Every setting has a serde default; only the provider API key must come
//! from the environment.

use std::env;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripcastConfig {
    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream weather provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the built frontend assets
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

/// Upstream weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// OpenWeatherMap API key, appended to every upstream request
    #[serde(default)]
    pub api_key: String,
    /// Base URL for the current-weather and forecast endpoints
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,
    /// Base URL for the reverse-geocoding endpoint
    #[serde(default = "default_geo_base_url")]
    pub geo_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_frontend_dir() -> String {
    "frontend/dist".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_geo_base_url() -> String {
    "https://api.openweathermap.org/geo/1.0".to_string()
}

fn default_timeout() -> u32 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            frontend_dir: default_frontend_dir(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            weather_base_url: default_weather_base_url(),
            geo_base_url: default_geo_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl TripcastConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        config.provider.api_key =
            env::var("OPENWEATHER_API_KEY").context("Missing OPENWEATHER_API_KEY env var")?;

        if let Ok(port) = env::var("TRIPCAST_PORT") {
            config.server.port = port
                .parse()
                .context("TRIPCAST_PORT must be a port number")?;
        }
        if let Ok(dir) = env::var("TRIPCAST_FRONTEND_DIR") {
            config.server.frontend_dir = dir;
        }
        if let Ok(url) = env::var("TRIPCAST_WEATHER_BASE_URL") {
            config.provider.weather_base_url = url;
        }
        if let Ok(url) = env::var("TRIPCAST_GEO_BASE_URL") {
            config.provider.geo_base_url = url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TripcastConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.frontend_dir, "frontend/dist");
        assert_eq!(
            config.provider.weather_base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(
            config.provider.geo_base_url,
            "https://api.openweathermap.org/geo/1.0"
        );
        assert_eq!(config.provider.timeout_seconds, 30);
        assert!(config.provider.api_key.is_empty());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: TripcastConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.provider.timeout_seconds, 30);
    }
}
