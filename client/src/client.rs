//! Todo service HTTP client implementation

use crate::error::ClientError;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use todo_core::{TodoId, TodoItem};

/// The part of the service's error envelope the client surfaces.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: String,
}

/// Todo service client
///
/// Every call targets `{base_url}/api/todo`.
#[derive(Clone, Debug)]
pub struct TodoClient {
    client: Client,
    api_url: String,
}

impl TodoClient {
    /// Create a client for a service at `base_url` (e.g. `http://localhost:5000`)
    #[must_use]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client that reuses an existing `reqwest::Client`
    #[must_use]
    pub fn with_client(client: Client, base_url: impl AsRef<str>) -> Self {
        let base = base_url.as_ref().trim_end_matches('/');
        Self {
            client,
            api_url: format!("{base}/api/todo"),
        }
    }

    /// All items, in the order the service returns them (newest first)
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx responses, or parsing failures
    pub async fn list(&self) -> Result<Vec<TodoItem>, ClientError> {
        let response = self
            .client
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Self::decode(response).await
    }

    /// Create an item
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 400 when the title is rejected
    pub async fn create(&self, title: &str) -> Result<TodoItem, ClientError> {
        let response = self
            .client
            .post(&self.api_url)
            .json(&serde_json::json!({ "title": title }))
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Self::decode(response).await
    }

    /// Delete an item
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 when the id is unknown
    pub async fn delete(&self, id: &TodoId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/{id}", self.api_url))
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Self::check(response).await.map(|_| ())
    }

    /// Flip an item's completion state
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 when the id is unknown
    pub async fn toggle(&self, id: &TodoId) -> Result<TodoItem, ClientError> {
        let response = self
            .client
            .patch(format!("{}/{id}/toggle", self.api_url))
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        Self::check(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Pass 2xx responses through; turn anything else into `ClientError::Api`.
    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = Self::error_message(status, &body);

        tracing::warn!(status = status.as_u16(), %message, "Todo service returned an error");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn error_message(status: StatusCode, body: &str) -> String {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => envelope.message,
            Err(_) if body.is_empty() => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => body.to_string(),
        }
    }
}
