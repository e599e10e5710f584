//! Main client for the mcp-call SDK.

use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};
use crate::transport::{HttpTransport, TransportResult};
use mcp_call_core::{CallPlan, JsonRpcRequest, JsonRpcResponse};
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Client performing single JSON-RPC calls against an MCP endpoint.
#[derive(Debug, Clone)]
pub struct McpCallClient {
    config: Arc<ClientConfig>,
    http: HttpTransport,
}

impl McpCallClient {
    /// Create a new client builder.
    pub fn builder() -> McpCallClientBuilder {
        McpCallClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> SdkResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Create a client for a resolved call plan.
    pub fn from_plan(plan: &CallPlan) -> SdkResult<Self> {
        let builder = Self::builder().endpoint(&plan.endpoint);
        match plan.api_key {
            Some(ref key) => builder.api_key(key).build(),
            None => builder.build(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send the request and return the raw reply.
    ///
    /// Any HTTP status and any body count as a completed call. A JSON-RPC error
    /// envelope is logged but otherwise returned like a success.
    pub async fn call(&self, request: &JsonRpcRequest) -> SdkResult<TransportResult> {
        let result = self.http.post_rpc(request).await?;
        inspect_envelope(&result.body);
        Ok(result)
    }
}

fn inspect_envelope(body: &str) {
    let Ok(response) = serde_json::from_str::<JsonRpcResponse>(body) else {
        debug!("Response is not a JSON-RPC envelope");
        return;
    };

    if let Some(error) = response.error {
        warn!(
            code = error.code,
            message = %error.message,
            "Server returned JSON-RPC error"
        );
    }
}

/// Builder for creating a McpCallClient.
pub struct McpCallClientBuilder {
    endpoint: Option<String>,
    api_key: Option<String>,
}

impl McpCallClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            endpoint: None,
            api_key: None,
        }
    }

    /// Set the full JSON-RPC endpoint URL.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> SdkResult<McpCallClient> {
        let endpoint_str = self
            .endpoint
            .ok_or_else(|| SdkError::Config("endpoint is required".to_string()))?;

        let config = ClientConfig {
            endpoint: Url::parse(&endpoint_str)?,
            api_key: self.api_key,
        };

        McpCallClient::from_config(config)
    }
}

impl Default for McpCallClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
