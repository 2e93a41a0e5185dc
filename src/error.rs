use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt::Display;

use crate::services::ServiceError;

pub type AppResult<T> = Result<T, AppError>;

pub const NOT_FOUND: &str = "NOT_FOUND";
pub const CONFLICT: &str = "CONFLICT";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const APP_ERROR: &str = "APP_ERROR";
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    error_code: &'static str,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, error_code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            error_code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, CONFLICT, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, VALIDATION_ERROR, message)
    }

    /// Request body or path that never made it past the schema check.
    pub fn invalid_request(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, INVALID_REQUEST, message)
    }

    pub fn internal<E: Display>(error: E) -> Self {
        tracing::error!(error = %error, "unhandled application error");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            APP_ERROR,
            "internal server error",
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error_code(&self) -> &'static str {
        self.error_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status;
        let body = Json(ErrorResponse {
            error_code: self.error_code,
            message: self.message,
        });
        (status, body).into_response()
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error_code: &'static str,
    message: String,
}

impl From<ServiceError> for AppError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::NotFound(message) => AppError::not_found(message),
            ServiceError::Conflict(message) => AppError::conflict(message),
            ServiceError::Validation(message) => AppError::validation(message),
            ServiceError::Store(err) => AppError::internal(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        AppError::invalid_request(StatusCode::UNPROCESSABLE_ENTITY, value.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(value: PathRejection) -> Self {
        AppError::invalid_request(StatusCode::BAD_REQUEST, value.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(value: validator::ValidationErrors) -> Self {
        AppError::invalid_request(StatusCode::UNPROCESSABLE_ENTITY, value.to_string())
    }
}
