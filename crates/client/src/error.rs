//! Errors surfaced by [`TodosClient`](crate::TodosClient).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("request to todos server failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx status other than 404. `message` is the body's `error` text.
    #[error("todos server answered {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// A 2xx body that is not the expected todo JSON.
    #[error("unexpected response body: {0}")]
    Json(#[from] serde_json::Error),
}
