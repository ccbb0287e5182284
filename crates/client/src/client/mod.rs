//! HTTP client for the todos API.

pub mod todos;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// HTTP client for the todos API.
#[derive(Debug, Clone)]
pub struct TodosClient {
    client: reqwest::Client,
    base_url: String,
}

/// Error body returned by the server on every failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Pulls the `error` field out of a failure body, falling back to the raw text.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string())
}

impl TodosClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into a [`ClientError`].
    async fn error_from(&self, response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = error_message(&body);

        if status == 404 {
            ClientError::NotFound { resource: message }
        } else {
            ClientError::ServerError { status, message }
        }
    }

    /// Handle responses that carry a JSON body.
    ///
    /// The body is read as text first so a malformed payload is reported as
    /// [`ClientError::Json`] rather than a transport failure.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            return Err(self.error_from(response).await);
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Handle delete responses (no body expected).
    async fn handle_delete_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.error_from(response).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = TodosClient::new("http://localhost:3000/");

        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.url("/rest/todos/"),
            "http://localhost:3000/rest/todos/"
        );
    }

    #[test]
    fn test_error_message_reads_error_field() {
        assert_eq!(
            error_message(r#"{"error":"Todo not found: 3"}"#),
            "Todo not found: 3"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("Method Not Allowed"), "Method Not Allowed");
        assert_eq!(error_message(""), "");
    }
}
