use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use filtercycle_core::filter::{filter_error_to_status_code, ErrorBody, FilterError};
use filtercycle_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler error that wraps `anyhow::Error`.
///
/// The status code comes from the wrapped error when it is a
/// [`RepositoryError`] or [`FilterError`]; anything else is a 500. The body is
/// always `{"error": "<message>"}`, carrying the backend's own text for
/// storage failures.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else if let Some(filter_error) = self.0.downcast_ref::<FilterError>() {
            filter_error_to_status_code(filter_error)
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => repo_error.raw_message(),
            None => self.0.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status, message = %message, "API error");
        }

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
