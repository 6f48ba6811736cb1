//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the CourseCal
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! Authorization denials map to 403 responses rather than surfacing as hard
//! errors, and no variant exposes storage internals to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coursecal_core::errors::CourseError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `CourseError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub CourseError);

/// Converts application errors to HTTP responses.
///
/// Each error type maps to a status code; the message is formatted into a
/// JSON body. Field-level validation errors additionally name the offending
/// field so the caller can attach the message to the right input.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            CourseError::NotFound(_) => StatusCode::NOT_FOUND,
            CourseError::Validation(_) => StatusCode::BAD_REQUEST,
            CourseError::FieldValidation { .. } => StatusCode::BAD_REQUEST,
            CourseError::Authentication(_) => StatusCode::UNAUTHORIZED,
            CourseError::Authorization(_) => StatusCode::FORBIDDEN,
            CourseError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CourseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = match &self.0 {
            CourseError::FieldValidation { field, .. } => {
                Json(json!({ "error": message, "field": field }))
            }
            _ => Json(json!({ "error": message })),
        };

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from CourseError to AppError.
///
/// This implementation allows using the `?` operator with functions that
/// return `Result<T, CourseError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<CourseError> for AppError {
    fn from(err: CourseError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError.
///
/// Wraps the eyre error in a `CourseError::Database` variant so repository
/// failures can bubble up with `?`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(CourseError::Database(err))
    }
}

/// Maps a CourseError to an HTTP response.
pub fn map_error(err: CourseError) -> Response {
    AppError(err).into_response()
}
