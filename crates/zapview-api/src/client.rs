//! HTTP client for the collaborator API.
//!
//! Two endpoints, both GET, both carrying a fixed literal credential in the
//! `Authorization` header. There is no login flow, no retry policy, and no
//! client-side timeout beyond the transport defaults.

use crate::error::ApiError;
use crate::model::Conversation;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Base URL of the collaborator API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Fixed credential literal sent as the `Authorization` header value.
pub const AUTH_CREDENTIAL: &str = "debug";

/// Client for the conversation endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full set of conversations.
    ///
    /// The list form may omit per-conversation messages.
    pub async fn list_conversations(&self) -> Result<Vec<Conversation>, ApiError> {
        self.get_json("/conversations/").await
    }

    /// Fetch a single conversation, including its full message sequence.
    ///
    /// Any identifier is accepted and forwarded; validity is the server's
    /// concern.
    pub async fn conversation_detail(&self, id: &str) -> Result<Conversation, ApiError> {
        self.get_json(&format!("/conversations/{id}/")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");

        let response = self
            .http
            .get(&url)
            .header("Authorization", AUTH_CREDENTIAL)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
            });
        }

        // Decode from bytes instead of `Response::json` so schema mismatches
        // surface as an explicit parse error with serde detail.
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ApiError::Parse)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
