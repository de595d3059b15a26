//! Travel-advice rules and condition-based presentation helpers
//!
//! Conditions are matched by substring on the provider's primary condition
//! label, so "Thunderstorm" hits the thunder rule and "Drizzle" falls through
//! to the default.

/// Advice sentence for a condition label and rounded temperature
#[must_use]
pub fn advice_for(condition: &str, temperature: i32) -> &'static str {
    let condition = condition.to_lowercase();

    if condition.contains("rain") || condition.contains("thunder") {
        "Carry an umbrella/raincoat and prefer indoor activities."
    } else if condition.contains("snow") {
        "Dress warmly; check road conditions as travel may be difficult."
    } else if condition.contains("clear") {
        if temperature > 30 {
            "Hot day, stay hydrated, travel in morning/evening."
        } else {
            "Clear day, ideal for sightseeing!"
        }
    } else if condition.contains("cloud") {
        "Cloudy and comfortable for travel."
    } else if condition.contains("mist") || condition.contains("fog") {
        "Foggy; drive carefully and allow extra travel time."
    } else {
        "Weather is moderate, good for travel!"
    }
}

/// Background gradient for the main weather panel
#[must_use]
pub fn background_gradient(condition: &str) -> &'static str {
    let condition = condition.to_lowercase();

    if condition.contains("clear") {
        "linear-gradient(180deg,#fceabb,#f8b500)"
    } else if condition.contains("cloud") {
        "linear-gradient(180deg,#bdc3c7,#2c3e50)"
    } else if condition.contains("rain") {
        "linear-gradient(180deg,#2980b9,#6dd5fa)"
    } else if condition.contains("snow") {
        "linear-gradient(180deg,#e0eafc,#cfdef3)"
    } else if condition.contains("thunder") {
        "linear-gradient(180deg,#2c3e50,#4ca1af)"
    } else if condition.contains("mist") || condition.contains("fog") {
        "linear-gradient(180deg,#3e5151,#decba4)"
    } else {
        "linear-gradient(180deg,#081226,#071023)"
    }
}

/// Provider icon image URL for an icon code
#[must_use]
pub fn icon_url(code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{code}@2x.png")
}
