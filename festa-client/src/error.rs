//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network unreachable, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Session expired or missing credential
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by backend validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation (e.g., establishment at capacity)
    #[error("Business rule violation: {0}")]
    Business(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The backend-provided message for errors that carry one, when it is
    /// worth showing to the user verbatim
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Validation(msg) | Self::Business(msg) | Self::Forbidden(msg) => {
                (!msg.trim().is_empty()).then_some(msg.as_str())
            }
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
