use crate::config::ConfigError;
use crate::leads::{RoiError, ValidationErrors, WebhookError};
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
    Payload(serde_json::Error),
    Validation(ValidationErrors),
    Roi(RoiError),
    Webhook(WebhookError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Payload(err) => write!(f, "invalid payload: {}", err),
            AppError::Validation(err) => write!(f, "{}", err),
            AppError::Roi(err) => write!(f, "roi error: {}", err),
            AppError::Webhook(err) => write!(f, "webhook error: {}", err),
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
            AppError::Payload(err) => Some(err),
            AppError::Validation(err) => Some(err),
            AppError::Roi(err) => Some(err),
            AppError::Webhook(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": "Validation failed", "details": errors.errors }),
            ),
            AppError::Payload(_) | AppError::Roi(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": message }),
            ),
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Webhook(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "error": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
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

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<RoiError> for AppError {
    fn from(value: RoiError) -> Self {
        Self::Roi(value)
    }
}

impl From<WebhookError> for AppError {
    fn from(value: WebhookError) -> Self {
        Self::Webhook(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let error = AppError::from(ValidationErrors::single("email", "email address is invalid"));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_failures_hide_details() {
        let error = AppError::from(WebhookError::Transport("connection refused".to_string()));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
