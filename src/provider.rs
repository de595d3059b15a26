//! OpenWeatherMap HTTP client
//!
//! Thin async client over the provider's current-weather, forecast and
//! reverse-geocoding endpoints. Raw response structures live in the `owm`
//! submodule together with their conversions into internal models.
//! No retries: a failed call is terminal for the triggering request.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::ProviderConfig;
use crate::error::TripcastError;
use crate::models::{LocationQuery, Units};

/// HTTP client for the OpenWeatherMap API
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl OpenWeatherClient {
    /// Create a new provider client
    pub fn new(config: ProviderConfig) -> Result<Self, TripcastError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("tripcast/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch current weather for a query
    #[instrument(skip(self))]
    pub async fn current_weather(
        &self,
        query: &LocationQuery,
        units: Units,
    ) -> Result<owm::CurrentResponse, TripcastError> {
        let url = format!(
            "{}/weather?{}&units={}&appid={}",
            self.config.weather_base_url,
            Self::location_params(query),
            units.query_value(),
            self.config.api_key
        );
        self.get_json(&url, "Current weather fetch failed").await
    }

    /// Fetch the multi-day forecast (3-hour samples) for a query
    #[instrument(skip(self))]
    pub async fn forecast(
        &self,
        query: &LocationQuery,
        units: Units,
    ) -> Result<owm::ForecastResponse, TripcastError> {
        let url = format!(
            "{}/forecast?{}&units={}&appid={}",
            self.config.weather_base_url,
            Self::location_params(query),
            units.query_value(),
            self.config.api_key
        );
        self.get_json(&url, "Forecast fetch failed").await
    }

    /// Resolve coordinates to a "<city>, <country>" display name.
    /// Returns `None` when the provider has no result for the coordinates.
    #[instrument(skip(self))]
    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<Option<String>, TripcastError> {
        let url = format!(
            "{}/reverse?lat={lat}&lon={lon}&limit=1&appid={}",
            self.config.geo_base_url, self.config.api_key
        );
        let results: Vec<owm::GeoResult> = self.get_json(&url, "Reverse geocoding failed").await?;
        Ok(results.into_iter().next().map(|place| place.display_name()))
    }

    fn location_params(query: &LocationQuery) -> String {
        match query {
            LocationQuery::Place(name) => format!("q={}", urlencoding::encode(name)),
            LocationQuery::Coordinates(lat, lon) => format!("lat={lat}&lon={lon}"),
        }
    }

    /// One GET request; non-success responses become an `Upstream` error
    /// carrying the provider's own message when it supplies one.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        fallback_message: &str,
    ) -> Result<T, TripcastError> {
        debug!(
            url = url.split("appid=").next().unwrap_or(url),
            "Provider request"
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<owm::ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| fallback_message.to_string());
            return Err(TripcastError::upstream(message));
        }

        Ok(response.json().await?)
    }
}

/// Raw OpenWeatherMap response structures and conversions
pub mod owm {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    use crate::models::{Coordinates, CurrentConditions, Forecast, ForecastEntry};

    /// Current-weather endpoint response
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub coord: Coord,
        pub weather: Vec<ConditionSummary>,
        pub main: MainReadings,
        pub wind: Wind,
        pub name: String,
        pub sys: Sys,
    }

    #[derive(Debug, Deserialize)]
    pub struct Coord {
        pub lat: f64,
        pub lon: f64,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct ConditionSummary {
        pub main: String,
        pub description: String,
        pub icon: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainReadings {
        pub temp: f32,
        pub feels_like: f32,
        pub humidity: u8,
        pub pressure: f32,
    }

    #[derive(Debug, Deserialize)]
    pub struct Wind {
        pub speed: f32,
    }

    #[derive(Debug, Deserialize)]
    pub struct Sys {
        pub country: Option<String>,
    }

    /// Forecast endpoint response (3-hour samples)
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastItem>,
        pub city: City,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastItem {
        pub dt: i64,
        pub main: ItemReadings,
        pub weather: Vec<ConditionSummary>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ItemReadings {
        pub temp: f32,
    }

    #[derive(Debug, Deserialize)]
    pub struct City {
        pub coord: Coord,
    }

    /// Reverse-geocoding endpoint result
    #[derive(Debug, Deserialize)]
    pub struct GeoResult {
        pub name: String,
        pub country: Option<String>,
    }

    /// Error body the provider returns on non-success statuses
    #[derive(Debug, Deserialize)]
    pub struct ErrorResponse {
        pub message: Option<String>,
    }

    impl From<Coord> for Coordinates {
        fn from(coord: Coord) -> Self {
            Self {
                latitude: coord.lat,
                longitude: coord.lon,
            }
        }
    }

    impl GeoResult {
        #[must_use]
        pub fn display_name(&self) -> String {
            match &self.country {
                Some(country) => format!("{}, {}", self.name, country),
                None => self.name.clone(),
            }
        }
    }

    impl CurrentResponse {
        /// "<city>, <country>" derived from the payload's own fields
        #[must_use]
        pub fn display_name(&self) -> String {
            match &self.sys.country {
                Some(country) => format!("{}, {}", self.name, country),
                None => self.name.clone(),
            }
        }

        /// Convert into the internal model, attaching the resolved display name
        #[must_use]
        pub fn into_conditions(self, display_name: String) -> CurrentConditions {
            let summary = self.weather.into_iter().next().unwrap_or_default();
            CurrentConditions {
                temperature: self.main.temp,
                feels_like: self.main.feels_like,
                humidity: self.main.humidity,
                pressure: self.main.pressure,
                wind_speed: self.wind.speed,
                condition: summary.main,
                description: summary.description,
                icon: summary.icon,
                coordinates: self.coord.into(),
                display_name,
            }
        }
    }

    impl ForecastResponse {
        /// Convert into the internal model, preserving sample order
        #[must_use]
        pub fn into_forecast(self) -> Forecast {
            let entries = self
                .list
                .into_iter()
                .map(|item| {
                    let summary = item.weather.into_iter().next().unwrap_or_default();
                    ForecastEntry {
                        timestamp: DateTime::from_timestamp(item.dt, 0)
                            .unwrap_or_else(Utc::now),
                        temperature: item.main.temp,
                        condition: summary.main,
                        description: summary.description,
                        icon: summary.icon,
                    }
                })
                .collect();

            Forecast {
                coordinates: self.city.coord.into(),
                entries,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_current_response_conversion() {
            let raw: CurrentResponse = serde_json::from_value(serde_json::json!({
                "coord": {"lat": 51.5074, "lon": -0.1278},
                "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
                "main": {"temp": 17.8, "feels_like": 17.4, "pressure": 1012, "humidity": 72},
                "wind": {"speed": 4.1, "deg": 250},
                "sys": {"country": "GB"},
                "name": "London"
            }))
            .unwrap();

            assert_eq!(raw.display_name(), "London, GB");

            let current = raw.into_conditions("London, GB".to_string());
            assert_eq!(current.condition, "Clouds");
            assert_eq!(current.humidity, 72);
            assert_eq!(current.coordinates.latitude, 51.5074);
        }

        #[test]
        fn test_current_response_without_country() {
            let raw: CurrentResponse = serde_json::from_value(serde_json::json!({
                "coord": {"lat": 0.0, "lon": 0.0},
                "weather": [],
                "main": {"temp": 28.0, "feels_like": 30.0, "pressure": 1009, "humidity": 80},
                "wind": {"speed": 2.0},
                "sys": {},
                "name": "Null Island"
            }))
            .unwrap();

            assert_eq!(raw.display_name(), "Null Island");

            let current = raw.into_conditions("Null Island".to_string());
            assert!(current.condition.is_empty());
        }

        #[test]
        fn test_forecast_response_conversion() {
            let raw: ForecastResponse = serde_json::from_value(serde_json::json!({
                "list": [
                    {
                        "dt": 1_756_684_800,
                        "main": {"temp": 16.2},
                        "weather": [{"main": "Rain", "description": "light rain", "icon": "10d"}]
                    },
                    {
                        "dt": 1_756_695_600,
                        "main": {"temp": 18.9},
                        "weather": [{"main": "Clear", "description": "clear sky", "icon": "01d"}]
                    }
                ],
                "city": {"coord": {"lat": 51.5074, "lon": -0.1278}, "name": "London"}
            }))
            .unwrap();

            let forecast = raw.into_forecast();
            assert_eq!(forecast.entries.len(), 2);
            assert_eq!(forecast.entries[0].condition, "Rain");
            assert!(forecast.entries[0].timestamp < forecast.entries[1].timestamp);
        }
    }
}
