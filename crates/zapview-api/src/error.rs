//! Error types for collaborator API access.

/// Errors that can occur while fetching from the collaborator API.
///
/// All variants are surfaced identically to the user (a generic localized
/// banner); the variant detail only feeds diagnostic logging.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, etc.).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status} for {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },

    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Parse(#[source] serde_json::Error),
}
