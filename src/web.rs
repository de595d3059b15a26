//! Web server bootstrap

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::{self, ApiState};
use crate::config::TripcastConfig;
use crate::provider::OpenWeatherClient;
use crate::service::ProxyWeatherService;

/// Build the application router: `/api` endpoints plus static frontend
pub fn app(state: ApiState, frontend_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(state))
        .fallback_service(ServeDir::new(frontend_dir))
        .layer(cors)
}

pub async fn run(config: TripcastConfig) -> Result<()> {
    let provider = OpenWeatherClient::new(config.provider.clone())?;
    let state = ApiState {
        service: Arc::new(ProxyWeatherService::new(provider)),
    };

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.server.port);

    axum::serve(listener, app(state, &config.server.frontend_dir))
        .await
        .context("Server error")?;
    Ok(())
}
