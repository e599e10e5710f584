//! Configuration types for the mcp-call SDK.

use url::Url;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Configuration for the client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full JSON-RPC endpoint, including the `/mcp` path.
    pub endpoint: Url,
    /// API key sent as `x-api-key`.
    pub api_key: Option<String>,
}

impl ClientConfig {
    /// Create a new unauthenticated configuration for the given endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            api_key: None,
        }
    }

    /// Attach an API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}
