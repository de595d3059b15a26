//! Tripcast - weather lookup and travel advice
//!
//! This library provides the weather proxy endpoint (current conditions and
//! multi-day forecast combined into one document) and the client controller
//! that turns user actions into fetches, view models and travel advice.

pub mod advice;
pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod provider;
pub mod service;
pub mod view;
pub mod web;

// Re-export core types for public API
pub use config::TripcastConfig;
pub use controller::{Controller, Geolocator, StatusListener, Update};
pub use error::TripcastError;
pub use models::{
    Coordinates, CurrentConditions, Forecast, ForecastEntry, LocationQuery, Units, WeatherReport,
};
pub use service::{ProxyWeatherService, WeatherLookup};
pub use view::{AdviceView, WeatherView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripcastError>;
