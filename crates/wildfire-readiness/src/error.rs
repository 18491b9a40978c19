use crate::config::ConfigError;
use crate::scenario::ScenarioError;
use crate::scoring::{ModelError, ScoringError, StartupError, ValidationError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Startup(StartupError),
    Scoring(ScoringError),
    Scenario(ScenarioError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Scoring(ScoringError::Validation(_)) | AppError::Scenario(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Scoring(ScoringError::Model(_))
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Startup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Startup(err) => write!(f, "startup error: {}", err),
            // request errors are shown to API callers verbatim
            AppError::Scoring(err) => write!(f, "{}", err),
            AppError::Scenario(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Startup(err) => Some(err),
            AppError::Scoring(err) => Some(err),
            AppError::Scenario(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<StartupError> for AppError {
    fn from(value: StartupError) -> Self {
        Self::Startup(value)
    }
}

impl From<ScoringError> for AppError {
    fn from(value: ScoringError) -> Self {
        Self::Scoring(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        Self::Scoring(ScoringError::Validation(value))
    }
}

impl From<ModelError> for AppError {
    fn from(value: ModelError) -> Self {
        Self::Scoring(ScoringError::Model(value))
    }
}

impl From<ScenarioError> for AppError {
    fn from(value: ScenarioError) -> Self {
        Self::Scenario(value)
    }
}
