//! # Error Handling Middleware
//!
//! Maps [`ScheduleError`] onto HTTP responses. The body of every error
//! response is the plain-text message of the error.
//!
//! Only validation failures are client errors. A reference to a user that
//! does not exist is answered with `500`, like every other failure, because
//! existing callers rely on that status.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use interview_core::errors::ScheduleError;
use tracing::{error, warn};

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use interview_api::middleware::error_handling::AppError;
/// use interview_core::errors::ScheduleError;
///
/// async fn handler(name: Option<String>) -> Result<String, AppError> {
///     let name = name.ok_or_else(|| {
///         ScheduleError::Validation("Please fill all mandatory fields".to_string())
///     })?;
///     Ok(format!("Hello {name}"))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
            ScheduleError::NotFound(_)
            | ScheduleError::MissingAvailability(_)
            | ScheduleError::Store(_)
            | ScheduleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();

        if self.0.is_client_error() {
            warn!(%status, %message, "Rejected request");
        } else {
            error!(%status, error = ?self.0, "Request failed");
        }

        (status, message).into_response()
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

/// Store failures surface as `ScheduleError::Store`
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Store(err))
    }
}

/// A body that is not the expected JSON is a validation failure
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(ScheduleError::Validation(rejection.body_text()))
    }
}

/// Maps a ScheduleError to an HTTP response
pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}
