//! Weather data models: current conditions, forecast samples, combined report

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

/// Current conditions for one location, produced by the proxy from the
/// provider's response. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in the requested unit system
    pub temperature: f32,
    /// Feels-like temperature
    pub feels_like: f32,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Atmospheric pressure in hPa
    pub pressure: f32,
    /// Wind speed in the requested unit system
    pub wind_speed: f32,
    /// Primary condition label (e.g. "Clouds", "Thunderstorm")
    pub condition: String,
    /// Human-readable description
    pub description: String,
    /// Provider icon code
    pub icon: String,
    pub coordinates: Coordinates,
    /// Derived "<city>, <country>" display name
    pub display_name: String,
}

/// One timestamped weather sample at 3-hour resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: DateTime<Utc>,
    pub temperature: f32,
    pub condition: String,
    pub description: String,
    pub icon: String,
}

impl ForecastEntry {
    /// Calendar date the sample falls on
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Chronologically ordered forecast samples plus the originating coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub coordinates: Coordinates,
    pub entries: Vec<ForecastEntry>,
}

impl Forecast {
    /// First entry whose timestamp falls on `date`
    #[must_use]
    pub fn entry_on(&self, date: NaiveDate) -> Option<&ForecastEntry> {
        self.entries.iter().find(|entry| entry.date() == date)
    }

    /// First entry per distinct calendar date, capped at `max_days` dates,
    /// order-preserving
    #[must_use]
    pub fn daily_overview(&self, max_days: usize) -> Vec<&ForecastEntry> {
        let mut days: Vec<&ForecastEntry> = Vec::with_capacity(max_days);
        for entry in &self.entries {
            if days.len() >= max_days {
                break;
            }
            if !days.iter().any(|seen| seen.date() == entry.date()) {
                days.push(entry);
            }
        }
        days
    }
}

/// Combined payload returned by the proxy endpoint and held by the client
/// controller as the last successful lookup. Current conditions and forecast
/// always come from the same query; the pair is replaced atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Forecast,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(timestamp: DateTime<Utc>, condition: &str) -> ForecastEntry {
        ForecastEntry {
            timestamp,
            temperature: 18.0,
            condition: condition.to_string(),
            description: condition.to_lowercase(),
            icon: "01d".to_string(),
        }
    }

    fn forecast_over_six_days() -> Forecast {
        let mut entries = Vec::new();
        for day in 1..=6 {
            for hour in [9, 12, 15] {
                let timestamp = Utc.with_ymd_and_hms(2026, 9, day, hour, 0, 0).unwrap();
                entries.push(entry(timestamp, "Clear"));
            }
        }
        Forecast {
            coordinates: Coordinates {
                latitude: 51.5,
                longitude: -0.12,
            },
            entries,
        }
    }

    #[test]
    fn test_daily_overview_caps_at_five_distinct_dates() {
        let forecast = forecast_over_six_days();
        let overview = forecast.daily_overview(5);

        assert_eq!(overview.len(), 5);
        let dates: Vec<NaiveDate> = overview.iter().map(|e| e.date()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(dates, sorted, "dates must be distinct and in order");
    }

    #[test]
    fn test_daily_overview_picks_first_entry_per_date() {
        let forecast = forecast_over_six_days();
        let overview = forecast.daily_overview(5);

        for entry in overview {
            assert_eq!(entry.timestamp.format("%H:%M").to_string(), "09:00");
        }
    }

    #[test]
    fn test_entry_on_finds_first_match() {
        let forecast = forecast_over_six_days();
        let date = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();

        let found = forecast.entry_on(date).unwrap();
        assert_eq!(found.date(), date);
        assert_eq!(found.timestamp.format("%H:%M").to_string(), "09:00");
    }

    #[test]
    fn test_entry_on_outside_range() {
        let forecast = forecast_over_six_days();
        let date = NaiveDate::from_ymd_opt(2026, 9, 30).unwrap();
        assert!(forecast.entry_on(date).is_none());
    }
}
