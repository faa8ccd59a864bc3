use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::fieldlog::FieldLogError;
use crate::workflows::logistics::ObservationError;
use crate::workflows::production::ProductionError;
use crate::workflows::rulebook::RuleBookError;
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
    RuleBook(RuleBookError),
    Production(ProductionError),
    Observation(ObservationError),
    FieldLog(FieldLogError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::RuleBook(err) => write!(f, "rule book error: {}", err),
            AppError::Production(err) => write!(f, "production advice error: {}", err),
            AppError::Observation(err) => write!(f, "invalid site observation: {}", err),
            AppError::FieldLog(err) => write!(f, "field log error: {}", err),
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
            AppError::RuleBook(err) => Some(err),
            AppError::Production(err) => Some(err),
            AppError::Observation(err) => Some(err),
            AppError::FieldLog(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Production(_) | AppError::Observation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::FieldLog(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::RuleBook(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

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

impl From<RuleBookError> for AppError {
    fn from(value: RuleBookError) -> Self {
        Self::RuleBook(value)
    }
}

impl From<ProductionError> for AppError {
    fn from(value: ProductionError) -> Self {
        Self::Production(value)
    }
}

impl From<ObservationError> for AppError {
    fn from(value: ObservationError) -> Self {
        Self::Observation(value)
    }
}

impl From<FieldLogError> for AppError {
    fn from(value: FieldLogError) -> Self {
        Self::FieldLog(value)
    }
}
