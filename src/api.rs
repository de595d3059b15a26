//! HTTP API for the weather proxy

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::info;

use crate::error::TripcastError;
use crate::models::{LocationQuery, Units, WeatherReport};
use crate::service::WeatherLookup;

/// Shared state for the API handlers
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<dyn WeatherLookup>,
}

#[derive(Debug, Deserialize)]
struct WeatherParams {
    #[serde(default)]
    city: Option<String>,
    // Raw string so unknown values degrade to the default instead of a
    // framework-level rejection.
    #[serde(default)]
    units: Option<String>,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .with_state(state)
}

/// `GET /weather?city=<place or "lat,lon">&units=<metric|imperial>`
///
/// Returns the combined current + forecast document, `400` on missing or
/// malformed input, `500` with the upstream message on provider failure.
async fn get_weather(
    State(state): State<ApiState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherReport>, TripcastError> {
    let query = LocationQuery::parse(params.city.as_deref().unwrap_or(""))?;
    let units = params
        .units
        .as_deref()
        .map_or_else(Units::default, Units::from_query);

    info!(?query, %units, "Weather lookup");

    let report = state.service.lookup(&query, units).await?;
    Ok(Json(report))
}
