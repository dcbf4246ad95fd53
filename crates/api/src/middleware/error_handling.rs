//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! SchoolSync API. It maps domain-specific errors to appropriate HTTP
//! status codes and JSON error responses, ensuring a consistent error
//! handling experience across the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with SchoolSync's custom error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use schoolsync_core::errors::SchoolError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `SchoolError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
///
/// # Example
///
/// ```ignore
/// async fn handler(id: i32) -> Result<Json<StudentResponse>, AppError> {
///     let student = repositories::student::get_student_by_id(&pool, id)
///         .await
///         .map_err(SchoolError::Database)?
///         .ok_or_else(|| SchoolError::NotFound(format!("Student {id} not found")))?;
///
///     Ok(Json(student.into_model()))
/// }
/// ```
#[derive(Debug)]
pub struct AppError(pub SchoolError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            SchoolError::NotFound(_) => StatusCode::NOT_FOUND,
            SchoolError::Validation(_) => StatusCode::BAD_REQUEST,
            SchoolError::Authorization(_) => StatusCode::FORBIDDEN,
            SchoolError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SchoolError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // The engine's message travels verbatim; the client presents it.
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from SchoolError to AppError
///
/// This implementation allows using the `?` operator with functions that
/// return `Result<T, SchoolError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<SchoolError> for AppError {
    fn from(err: SchoolError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// This implementation allows using the `?` operator with functions that
/// return `Result<T, eyre::Report>` in handler functions that return
/// `Result<T, AppError>`. It wraps the eyre error in a
/// `SchoolError::Database` variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SchoolError::Database(err))
    }
}

/// Maps a SchoolError to an HTTP response
///
/// This function is provided for code that maps errors outside a handler's
/// `Result` return position.
pub fn map_error(err: SchoolError) -> Response {
    AppError(err).into_response()
}
