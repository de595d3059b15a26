//! Location queries, coordinates and unit systems

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TripcastError;

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A parsed location query: free-text place name or coordinate pair
///
/// Exists only for the duration of one request.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Place name (city, region, etc.)
    Place(String),
    /// Coordinates (latitude, longitude)
    Coordinates(f64, f64),
}

impl LocationQuery {
    /// Parse user input. Two comma-separated numeric components are
    /// coordinates; anything else is a place name.
    pub fn parse(input: &str) -> Result<Self, TripcastError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TripcastError::validation(
                "City or coordinates are required.",
            ));
        }

        if input.contains(',') {
            let parts: Vec<&str> = input.split(',').map(str::trim).collect();
            if parts.len() == 2 {
                if let (Ok(lat), Ok(lon)) = (parts[0].parse::<f64>(), parts[1].parse::<f64>()) {
                    return Self::coordinates(lat, lon);
                }
            }
        }

        Ok(Self::Place(input.to_string()))
    }

    /// Build a coordinate query, validating coordinate ranges
    pub fn coordinates(lat: f64, lon: f64) -> Result<Self, TripcastError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(TripcastError::validation(format!(
                "Latitude must be between -90 and 90, got: {lat}"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(TripcastError::validation(format!(
                "Longitude must be between -180 and 180, got: {lon}"
            )));
        }
        Ok(Self::Coordinates(lat, lon))
    }

    #[must_use]
    pub fn is_coordinates(&self) -> bool {
        matches!(self, Self::Coordinates(..))
    }
}

/// Unit system for temperatures and wind speeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// The opposite unit system
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Units::Metric => Units::Imperial,
            Units::Imperial => Units::Metric,
        }
    }

    /// Temperature suffix for display
    #[must_use]
    pub fn temperature_label(self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    /// Wind speed label for display
    #[must_use]
    pub fn wind_label(self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }

    /// Lenient parse of a `units` query value; anything other than
    /// "imperial" reads as metric.
    #[must_use]
    pub fn from_query(value: &str) -> Self {
        match value {
            "imperial" => Units::Imperial,
            _ => Units::Metric,
        }
    }

    /// Value forwarded to the provider's `units` query parameter
    #[must_use]
    pub fn query_value(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_value())
    }
}
