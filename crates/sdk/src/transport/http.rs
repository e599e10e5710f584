//! HTTP transport for JSON-RPC calls.

use crate::config::{ClientConfig, API_KEY_HEADER};
use crate::error::{SdkError, SdkResult};
use mcp_call_core::JsonRpcRequest;
use reqwest::{header, Client};
use std::sync::Arc;
use tracing::{debug, warn};

/// Raw outcome of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResult {
    /// HTTP status code.
    pub status: u16,
    /// `content-type` of the response, if the server sent one.
    pub content_type: Option<String>,
    /// Response body, undecoded.
    pub body: String,
}

impl TransportResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport posting JSON-RPC requests to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> SdkResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        // Add API key header if present
        if let Some(ref api_key) = config.api_key {
            headers.insert(
                header::HeaderName::from_static(API_KEY_HEADER),
                header::HeaderValue::from_str(api_key)
                    .map_err(|_| SdkError::Config("Invalid API key format".to_string()))?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &url::Url {
        &self.config.endpoint
    }

    /// POST one request and return the response body whatever the status.
    pub async fn post_rpc(&self, request: &JsonRpcRequest) -> SdkResult<TransportResult> {
        let body = serde_json::to_string(request)?;
        debug!(
            url = %self.config.endpoint,
            method = %request.method,
            id = %request.id,
            "POST request"
        );

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        if status.is_success() {
            debug!(status = status.as_u16(), bytes = body.len(), "Received response");
        } else {
            warn!(status = status.as_u16(), bytes = body.len(), "Server returned non-success status");
        }

        Ok(TransportResult {
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}
