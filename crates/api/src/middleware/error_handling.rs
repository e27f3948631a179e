//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies of the form
//! `{"error": "<message>"}`.
//!
//! User-facing errors carry their literal message. Database and internal
//! failures are logged server-side and answered with a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use caresync_core::errors::CareError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use caresync_api::middleware::error_handling::AppError;
/// use caresync_core::errors::CareError;
///
/// async fn handler(id: i32) -> Result<Json<i32>, AppError> {
///     if id <= 0 {
///         return Err(AppError(CareError::NotFound(format!("Appointment with ID {} not found", id))));
///     }
///     Ok(Json(id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub CareError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CareError::NotFound(_) => StatusCode::NOT_FOUND,
            CareError::Validation(_) => StatusCode::BAD_REQUEST,
            CareError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CareError::MissingField(_) => StatusCode::BAD_REQUEST,
            CareError::Conflict(_) => StatusCode::CONFLICT,
            CareError::Authentication(_) => StatusCode::UNAUTHORIZED,
            CareError::Authorization(_) => StatusCode::FORBIDDEN,
            CareError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CareError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `CareResult` inside handlers.
impl From<CareError> for AppError {
    fn from(err: CareError) -> Self {
        AppError(err)
    }
}

/// Wraps an eyre error from a repository call as a database failure.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(CareError::Database(err))
    }
}
