//! Request construction from parsed arguments.
//!
//! [`RequestBuilder`] applies defaults, validates method-specific input and
//! resolves where and how the request is sent. Every failure here is an
//! [`InputError`] and happens before any network activity.

use serde_json::Value;
use tracing::debug;

use crate::args::ArgumentMap;
use crate::config::EnvDefaults;
use crate::error::{InputError, InputResult};
use crate::protocol::{methods, CallToolParams, JsonObject, JsonRpcRequest};

/// Request id used when `--id` is not given.
pub const DEFAULT_ID: &str = "cli";

/// Params text used when neither `--params` nor `--params-json` is given.
pub const DEFAULT_PARAMS: &str = "{}";

/// Path of the JSON-RPC endpoint below the base URL.
pub const MCP_PATH: &str = "/mcp";

/// Everything needed to perform one call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallPlan {
    /// Full endpoint URL, `<base>/mcp`.
    pub endpoint: String,
    /// Key sent as `x-api-key`, if any.
    pub api_key: Option<String>,
    pub request: JsonRpcRequest,
}

/// Builds a [`CallPlan`] from command-line flags and environment defaults.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    args: &'a ArgumentMap,
    env: &'a EnvDefaults,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(args: &'a ArgumentMap, env: &'a EnvDefaults) -> Self {
        Self { args, env }
    }

    /// JSON-RPC method, `initialize` by default.
    pub fn method(&self) -> &'a str {
        self.args
            .get_non_empty("method")
            .unwrap_or(methods::INITIALIZE)
    }

    /// Request id, `cli` by default.
    pub fn id(&self) -> &'a str {
        self.args.get_non_empty("id").unwrap_or(DEFAULT_ID)
    }

    /// Raw params text from `--params`, then `--params-json`.
    pub fn params_text(&self) -> &'a str {
        self.args
            .get_non_empty("params")
            .or_else(|| self.args.get_non_empty("params-json"))
            .unwrap_or(DEFAULT_PARAMS)
    }

    /// Params object to send.
    ///
    /// For `tools/call` the user JSON becomes the nested `arguments` next to the
    /// required tool `name`.
    pub fn params(&self) -> InputResult<JsonObject> {
        let params = parse_params_object(self.params_text())?;

        if self.method() != methods::TOOLS_CALL {
            return Ok(params);
        }

        let name = self
            .args
            .get_non_empty("name")
            .ok_or(InputError::MissingToolName)?;

        Ok(CallToolParams {
            name: name.to_string(),
            arguments: params,
        }
        .into())
    }

    pub fn request(&self) -> InputResult<JsonRpcRequest> {
        Ok(JsonRpcRequest::new(self.id(), self.method(), self.params()?))
    }

    /// Endpoint URL from `--url`, else the local server on `PORT`.
    pub fn endpoint(&self) -> String {
        match self.args.get_non_empty("url") {
            Some(url) => endpoint_for(url),
            None => endpoint_for(&self.env.local_base_url()),
        }
    }

    /// API key from `--key`, else `USER_API_KEY`.
    pub fn api_key(&self) -> Option<String> {
        self.args
            .get_non_empty("key")
            .map(str::to_string)
            .or_else(|| self.env.api_key.clone())
    }

    pub fn build(&self) -> InputResult<CallPlan> {
        let request = self.request()?;
        let endpoint = self.endpoint();
        let api_key = self.api_key();

        debug!(
            endpoint = %endpoint,
            method = %request.method,
            id = %request.id,
            authenticated = api_key.is_some(),
            "Built JSON-RPC request"
        );

        Ok(CallPlan {
            endpoint,
            api_key,
            request,
        })
    }
}

/// Append the MCP path to a base URL, dropping one trailing slash.
pub fn endpoint_for(base_url: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{base}{MCP_PATH}")
}

/// Parse params text, which must hold a JSON object.
pub fn parse_params_object(text: &str) -> InputResult<JsonObject> {
    match serde_json::from_str::<Value>(text).map_err(InputError::InvalidParamsJson)? {
        Value::Object(object) => Ok(object),
        other => Err(InputError::ParamsNotObject(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
