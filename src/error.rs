//! Error types for the tripcast service

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for the tripcast service
///
/// Two kinds suffice: invalid user input and failures of the upstream
/// weather provider.
#[derive(Error, Debug)]
pub enum TripcastError {
    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Network failure or non-success response from the weather provider
    #[error("Upstream error: {message}")]
    Upstream { message: String },
}

impl TripcastError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripcastError::Validation { message } => message.clone(),
            TripcastError::Upstream { .. } => "Unable to fetch weather".to_string(),
        }
    }

    /// HTTP status the error maps to on the proxy surface
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            TripcastError::Validation { .. } => StatusCode::BAD_REQUEST,
            TripcastError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            TripcastError::Validation { message } | TripcastError::Upstream { message } => message,
        }
    }
}

impl From<reqwest::Error> for TripcastError {
    fn from(source: reqwest::Error) -> Self {
        Self::Upstream {
            message: source.to_string(),
        }
    }
}

impl IntoResponse for TripcastError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.message() }));
        (self.status_code(), body).into_response()
    }
}
