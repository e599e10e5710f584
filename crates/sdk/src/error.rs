//! Error types for the mcp-call SDK.

/// Result type for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Error types that can occur while dispatching a call.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// HTTP request failed (DNS, refused connection, broken body, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SdkError {
    /// Process exit code for runtime failures.
    pub const EXIT_CODE: u8 = 1;

    /// Check if the server could not be reached at all.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect())
    }
}
