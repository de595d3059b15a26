//! Data models for the tripcast service
//!
//! Core domain models organized by concern:
//! - Location: query parsing, coordinates and unit systems
//! - Weather: current conditions, forecast samples and the combined report

pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use location::{Coordinates, LocationQuery, Units};
pub use weather::{CurrentConditions, Forecast, ForecastEntry, WeatherReport};
