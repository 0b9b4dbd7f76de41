//! Error types for Redmine API operations.

use thiserror::Error;

/// Errors that can occur during Redmine API operations.
#[derive(Debug, Error)]
pub enum RedmineError {
    /// Configuration is missing or incomplete.
    #[error("Redmine configuration required: {0}")]
    ConfigMissing(String),

    /// Configuration is present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configured endpoint is not a parseable URL.
    #[error("Malformed endpoint: {0}")]
    MalformedEndpoint(#[from] url::ParseError),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A value could not be rendered as JSON for output.
    #[error("Failed to encode JSON output: {0}")]
    Encode(#[source] serde_json::Error),

    /// The service rejected the request and reported why.
    #[error("{message}")]
    Remote { message: String, status_code: u16 },

    /// Update or delete targeted a resource that does not exist.
    #[error("Not Found")]
    NotFound,
}

impl RedmineError {
    /// HTTP status reported by the service, if this error came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Remote { status_code, .. } => Some(*status_code),
            Self::NotFound => Some(404),
            _ => None,
        }
    }
}

/// Result type alias for Redmine operations.
pub type Result<T> = core::result::Result<T, RedmineError>;
