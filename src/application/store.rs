//! The post-store seam: everything the board needs from the remote service.

use async_trait::async_trait;
use postboard_api_types::{Post, PostWriteRequest};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The HTTP client itself could not be set up (TLS backend, ...).
    #[error("failed to build store client: {0}")]
    Client(String),
    /// The request never completed (connection refused, reset, ...).
    #[error("network failure: {0}")]
    Network(String),
    /// The store answered with a non-success status.
    #[error("store rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("failed to decode store response: {0}")]
    Decode(String),
    #[error("invalid store URL: {0}")]
    Url(#[from] url::ParseError),
}

impl StoreError {
    pub fn client(err: impl std::fmt::Display) -> Self {
        Self::Client(err.to_string())
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Client(_) => "client_setup",
            StoreError::Network(_) => "network_failure",
            StoreError::Rejected { .. } => "remote_rejection",
            StoreError::Decode(_) => "decode",
            StoreError::Url(_) => "url",
        }
    }
}

/// Remote collection of posts. Write acknowledgements are returned as raw
/// JSON because callers only log them.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    async fn create(&self, request: &PostWriteRequest) -> Result<serde_json::Value, StoreError>;

    async fn update(
        &self,
        id: &str,
        request: &PostWriteRequest,
    ) -> Result<serde_json::Value, StoreError>;

    async fn delete(&self, id: &str) -> Result<serde_json::Value, StoreError>;
}
