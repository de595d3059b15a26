//! Pure render functions mapping weather data to view models
//!
//! The controller calls these; binding view models to actual display
//! elements is a thin adapter outside this crate.

use chrono::NaiveDate;
use serde::Serialize;

use crate::advice;
use crate::models::{CurrentConditions, Forecast, ForecastEntry, Units};

/// Number of date-distinct cards in the forecast strip
pub const FORECAST_DAYS: usize = 5;

/// Rendered weather panel: current conditions plus the forecast strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    /// "<city>, <country>" heading
    pub place: String,
    /// Rounded temperature with unit suffix, e.g. "18°C"
    pub temperature: String,
    pub description: String,
    pub icon_url: String,
    /// Condition-matched background gradient
    pub background: &'static str,
    pub details: Vec<Detail>,
    /// One card per distinct calendar date, at most [`FORECAST_DAYS`]
    pub forecast: Vec<ForecastCard>,
}

/// One labelled line of the current-conditions detail list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

/// One card of the forecast strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastCard {
    pub date: NaiveDate,
    pub icon_url: String,
    pub temperature: String,
    pub condition: String,
}

/// Rendered travel advice for a selected date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdviceView {
    pub date: NaiveDate,
    pub description: String,
    pub temperature: String,
    pub advice: &'static str,
}

/// Render current conditions and the forecast strip under one unit system
#[must_use]
pub fn render_weather(current: &CurrentConditions, forecast: &Forecast, units: Units) -> WeatherView {
    let details = vec![
        Detail {
            label: "Feels",
            value: format!("{}°", round(current.feels_like)),
        },
        Detail {
            label: "Humidity",
            value: format!("{}%", current.humidity),
        },
        Detail {
            label: "Wind",
            value: format!("{} {}", current.wind_speed, units.wind_label()),
        },
        Detail {
            label: "Pressure",
            value: format!("{} hPa", current.pressure),
        },
    ];

    let cards = forecast
        .daily_overview(FORECAST_DAYS)
        .into_iter()
        .map(|entry| ForecastCard {
            date: entry.date(),
            icon_url: advice::icon_url(&entry.icon),
            temperature: format_temperature(entry.temperature, units),
            condition: entry.condition.clone(),
        })
        .collect();

    WeatherView {
        place: current.display_name.clone(),
        temperature: format_temperature(current.temperature, units),
        description: current.description.clone(),
        icon_url: advice::icon_url(&current.icon),
        background: advice::background_gradient(&current.condition),
        details,
        forecast: cards,
    }
}

/// Render travel advice for one forecast entry
#[must_use]
pub fn render_advice(entry: &ForecastEntry, units: Units) -> AdviceView {
    let temperature = round(entry.temperature);
    AdviceView {
        date: entry.date(),
        description: entry.description.clone(),
        temperature: format!("{temperature}{}", units.temperature_label()),
        advice: advice::advice_for(&entry.condition, temperature),
    }
}

/// Rounded temperature with unit suffix
#[must_use]
pub fn format_temperature(temperature: f32, units: Units) -> String {
    format!("{}{}", round(temperature), units.temperature_label())
}

#[allow(clippy::cast_possible_truncation)]
fn round(temperature: f32) -> i32 {
    temperature.round() as i32
}
