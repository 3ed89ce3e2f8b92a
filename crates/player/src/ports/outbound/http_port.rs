//! HTTP Port - Object-safe boundary for server actions
//!
//! Party management and in-game actions are plain POST requests. The session
//! cookie set by the server on create/join must travel with every later
//! request, so a single adapter instance is shared for the whole session.

use serde_json::Value;

/// Errors raised while talking to the game server over HTTP
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Could not encode request body: {0}")]
    Encode(String),
    #[error("Could not decode response: {0}")]
    Decode(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpPost: Send + Sync {
    /// POST with no body, ignoring any response body
    async fn post_empty(&self, path: &str) -> Result<(), ApiError>;

    /// POST a JSON body, ignoring any response body
    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError>;

    /// POST a JSON body and decode the JSON response
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}
