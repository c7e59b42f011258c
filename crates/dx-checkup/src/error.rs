use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::checksheet::report::{ChartError, DriveOperationError};
use crate::workflows::checksheet::{AnswerSetError, CheckSheetError, CommentaryError};
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
    Bootstrap(String),
    CheckSheet(CheckSheetError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Bootstrap(reason) => write!(f, "startup error: {}", reason),
            AppError::CheckSheet(err) => write!(f, "check sheet error: {}", err),
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
            AppError::Bootstrap(_) => None,
            AppError::CheckSheet(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::CheckSheet(err) => err.into_response(),
            other => {
                let body = Json(json!({ "status": "error", "message": other.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
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

impl From<DriveOperationError> for AppError {
    fn from(value: DriveOperationError) -> Self {
        Self::Bootstrap(value.to_string())
    }
}

impl From<CommentaryError> for AppError {
    fn from(value: CommentaryError) -> Self {
        Self::Bootstrap(value.to_string())
    }
}

impl From<ChartError> for AppError {
    fn from(value: ChartError) -> Self {
        Self::Bootstrap(value.to_string())
    }
}

impl From<CheckSheetError> for AppError {
    fn from(value: CheckSheetError) -> Self {
        Self::CheckSheet(value)
    }
}

impl From<AnswerSetError> for AppError {
    fn from(value: AnswerSetError) -> Self {
        Self::CheckSheet(CheckSheetError::from(value))
    }
}
