//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 409 (Conflict)
/// - `NotSupported` -> 409 (Conflict)
///
/// # Examples
///
/// ```
/// use todos_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::todo_not_found(3);
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 409,
        RepositoryError::NotSupported(_) => 409,
    }
}

/// Client-facing message for a [`RepositoryError`].
///
/// Connection failures are reported with a fixed code instead of the driver
/// message; everything else uses the error's display text.
pub fn repository_error_message(error: &RepositoryError) -> String {
    match error {
        RepositoryError::ConnectionFailed(_) => "DB_CONNECTION_FAIL".to_string(),
        other => other.to_string(),
    }
}
