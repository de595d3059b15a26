//! Combined current-weather + forecast lookup
//!
//! One lookup issues the two upstream requests concurrently and merges the
//! derived display name into the result, mirroring the proxy contract. The
//! [`WeatherLookup`] trait is the seam shared by the HTTP handler and the
//! client controller, and lets tests stub the network.

use async_trait::async_trait;
use tracing::{instrument, warn};

use crate::error::TripcastError;
use crate::models::{LocationQuery, Units, WeatherReport};
use crate::provider::OpenWeatherClient;

/// Data-access seam for the proxy handler and the client controller
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    /// Fetch current conditions and the multi-day forecast for one query
    async fn lookup(
        &self,
        query: &LocationQuery,
        units: Units,
    ) -> Result<WeatherReport, TripcastError>;
}

/// [`WeatherLookup`] implementation backed by the OpenWeatherMap client
#[derive(Debug)]
pub struct ProxyWeatherService {
    provider: OpenWeatherClient,
}

impl ProxyWeatherService {
    #[must_use]
    pub fn new(provider: OpenWeatherClient) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl WeatherLookup for ProxyWeatherService {
    #[instrument(skip(self))]
    async fn lookup(
        &self,
        query: &LocationQuery,
        units: Units,
    ) -> Result<WeatherReport, TripcastError> {
        // Both upstream calls share the same location parameters and are
        // awaited together; either failure fails the whole lookup.
        let (current_raw, forecast_raw) = tokio::try_join!(
            self.provider.current_weather(query, units),
            self.provider.forecast(query, units),
        )?;

        // Place-name queries already carry a name in the payload; coordinate
        // queries go through reverse geocoding, falling back to a placeholder
        // rather than failing the lookup.
        let display_name = match query {
            LocationQuery::Place(_) => current_raw.display_name(),
            LocationQuery::Coordinates(lat, lon) => {
                match self.provider.reverse_geocode(*lat, *lon).await {
                    Ok(Some(name)) => name,
                    Ok(None) => "Unknown Location".to_string(),
                    Err(e) => {
                        warn!("Reverse geocoding failed: {e}");
                        "Unknown Location".to_string()
                    }
                }
            }
        };

        Ok(WeatherReport {
            current: current_raw.into_conditions(display_name),
            forecast: forecast_raw.into_forecast(),
        })
    }
}
