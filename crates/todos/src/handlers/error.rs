//! Controller error type and its HTTP rendering.

use std::any::Any;

use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todos_core::storage::{
    repository_error_message, repository_error_to_status_code, RepositoryError,
};
use todos_core::todo::InvalidTodoId;

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input: unparsable identifier or body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Anything not classified above.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// JSON body sent with every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Repository(repo_error) => {
                StatusCode::from_u16(repository_error_to_status_code(repo_error))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::BadRequest(_) => "Bad Request".to_string(),
            ApiError::Repository(repo_error) => repository_error_message(repo_error),
            ApiError::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}

impl From<InvalidTodoId> for ApiError {
    fn from(err: InvalidTodoId) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::BadRequest(format!("Invalid todo body: {err}"))
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(status = %status, error = ?self, "API error");

        (
            status,
            Json(ErrorBody {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}

/// Renders a panicking handler as an unclassified failure.
///
/// Installed through `CatchPanicLayer::custom`, so a panic still yields the
/// JSON error body and a 500.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
