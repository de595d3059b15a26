//! Client controller: UI state and the four user operations
//!
//! Owns the selected unit system and the last successful report, and wires
//! user actions to combined fetches through the [`WeatherLookup`] seam. Each
//! operation is independent and idempotent; shared state is replaced
//! atomically on success and left untouched on failure. All rendering goes
//! through the pure functions in [`crate::view`]; binding the resulting view
//! models (and these operations) to an actual UI surface is an adapter
//! outside this crate.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::TripcastError;
use crate::models::{LocationQuery, Units, WeatherReport};
use crate::service::WeatherLookup;
use crate::view::{self, AdviceView, WeatherView};

/// Initial status line shown before any search
pub const PROMPT_STATUS: &str = "Enter a location to get started";

/// Device geolocation seam. The embedding UI provides an implementation;
/// headless environments register none.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Current device position as (latitude, longitude)
    async fn locate(&self) -> Result<(f64, f64), TripcastError>;
}

/// Receives transient status lines ("Locating…", "Fetching weather…")
/// emitted while an operation is still running. The final result of the
/// operation is returned as an [`Update`] as usual.
pub trait StatusListener: Send + Sync {
    fn on_status(&self, status: &str);
}

/// One display update produced by a controller operation
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Replace the weather panel
    Weather(WeatherView),
    /// Replace the travel-advice panel
    Advice(AdviceView),
    /// Show a status line; the previous panel stays visible
    Status(String),
}

/// Client controller state and operations
pub struct Controller {
    service: Arc<dyn WeatherLookup>,
    geolocator: Option<Arc<dyn Geolocator>>,
    status_listener: Option<Arc<dyn StatusListener>>,
    units: Units,
    last: Option<WeatherReport>,
}

impl Controller {
    #[must_use]
    pub fn new(service: Arc<dyn WeatherLookup>) -> Self {
        Self {
            service,
            geolocator: None,
            status_listener: None,
            units: Units::Metric,
            last: None,
        }
    }

    /// Register a device geolocation source
    #[must_use]
    pub fn with_geolocator(mut self, geolocator: Arc<dyn Geolocator>) -> Self {
        self.geolocator = Some(geolocator);
        self
    }

    /// Register a sink for in-progress status lines
    #[must_use]
    pub fn with_status_listener(mut self, listener: Arc<dyn StatusListener>) -> Self {
        self.status_listener = Some(listener);
        self
    }

    /// Status line to show before any operation has run
    #[must_use]
    pub fn initial_status() -> Update {
        Update::Status(PROMPT_STATUS.to_string())
    }

    #[must_use]
    pub fn units(&self) -> Units {
        self.units
    }

    #[must_use]
    pub fn has_forecast(&self) -> bool {
        self.last.is_some()
    }

    /// Search by free text: coordinates when the input is two comma-separated
    /// numbers, place name otherwise.
    pub async fn search(&mut self, input: &str) -> Update {
        match LocationQuery::parse(input) {
            Ok(query) => self.fetch(query).await,
            Err(e) => Update::Status(e.user_message()),
        }
    }

    /// Fetch weather for the device position
    pub async fn use_my_location(&mut self) -> Update {
        let Some(geolocator) = self.geolocator.clone() else {
            return Update::Status("Geolocation not supported".to_string());
        };

        self.emit_status("Locating…");
        match geolocator.locate().await {
            Ok((lat, lon)) => match LocationQuery::coordinates(lat, lon) {
                Ok(query) => self.fetch(query).await,
                Err(e) => {
                    warn!("Geolocation returned invalid coordinates: {e}");
                    Update::Status("Unable to get location".to_string())
                }
            },
            Err(e) => {
                warn!("Geolocation failed: {e}");
                Update::Status("Unable to get location".to_string())
            }
        }
    }

    /// Flip between metric and imperial. When a report is loaded the last
    /// location is re-fetched by its coordinates under the new unit system;
    /// one extra round trip instead of a local conversion.
    pub async fn toggle_units(&mut self) -> Option<Update> {
        self.units = self.units.toggled();

        let coordinates = self.last.as_ref()?.current.coordinates;
        let query = LocationQuery::Coordinates(coordinates.latitude, coordinates.longitude);
        Some(self.fetch(query).await)
    }

    /// Travel advice for the first forecast entry on `date`. Never mutates
    /// the stored report.
    #[must_use]
    pub fn select_travel_date(&self, date: NaiveDate) -> Update {
        let Some(report) = &self.last else {
            return Update::Status(
                "No forecast data available. Search for a location first.".to_string(),
            );
        };

        match report.forecast.entry_on(date) {
            Some(entry) => Update::Advice(view::render_advice(entry, self.units)),
            None => Update::Status(format!("No forecast available for {date}.")),
        }
    }

    fn emit_status(&self, status: &str) {
        if let Some(listener) = &self.status_listener {
            listener.on_status(status);
        }
    }

    async fn fetch(&mut self, query: LocationQuery) -> Update {
        self.emit_status("Fetching weather…");
        debug!(?query, units = %self.units, "Fetching weather");

        match self.service.lookup(&query, self.units).await {
            Ok(report) => {
                let rendered = view::render_weather(&report.current, &report.forecast, self.units);
                self.last = Some(report);
                Update::Weather(rendered)
            }
            Err(e) => {
                warn!("Weather lookup failed: {e}");
                // A failed place search reads as a bad place name; coordinate
                // fetches report the generic failure.
                let status = if query.is_coordinates() {
                    "Unable to fetch weather"
                } else {
                    "Place not found"
                };
                Update::Status(status.to_string())
            }
        }
    }
}
