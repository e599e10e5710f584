// JSON-RPC 2.0 envelopes and the MCP parameter shapes the client sends

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC protocol version string.
pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON object, the only shape `params` may take.
pub type JsonObject = serde_json::Map<String, Value>;

/// MCP method names with client-side handling.
pub mod methods {
    pub const INITIALIZE: &str = "initialize";
    pub const TOOLS_LIST: &str = "tools/list";
    pub const TOOLS_CALL: &str = "tools/call";
}

/// JSON-RPC 2.0 Request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: String,
    pub method: String,
    pub params: JsonObject,
}

impl JsonRpcRequest {
    pub fn new(id: impl Into<String>, method: impl Into<String>, params: JsonObject) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 Response
///
/// Only used to inspect a reply for diagnostics; rendering works on raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// JSON-RPC 2.0 Error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Call tool request params
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: JsonObject,
}

impl From<CallToolParams> for JsonObject {
    fn from(params: CallToolParams) -> Self {
        let mut object = JsonObject::new();
        object.insert("name".to_string(), Value::String(params.name));
        object.insert("arguments".to_string(), Value::Object(params.arguments));
        object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_request_shape() {
        let request = JsonRpcRequest::new("cli", methods::TOOLS_LIST, JsonObject::new());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({"jsonrpc": "2.0", "id": "cli", "method": "tools/list", "params": {}})
        );
    }

    #[test]
    fn test_request_survives_serialization() {
        let request = JsonRpcRequest::new(
            "req-42",
            methods::TOOLS_CALL,
            object(json!({"name": "todo.lists.get", "arguments": {"nested": [1, "two", null]}})),
        );

        let text = serde_json::to_string(&request).unwrap();
        let parsed: JsonRpcRequest = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, request);
    }

    #[test]
    fn test_request_rejects_non_object_params() {
        let result = serde_json::from_str::<JsonRpcRequest>(
            r#"{"jsonrpc":"2.0","id":"cli","method":"initialize","params":[1]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_call_tool_params_into_object() {
        let params = CallToolParams {
            name: "foo".to_string(),
            arguments: object(json!({"a": 1})),
        };

        assert_eq!(
            Value::Object(params.into()),
            json!({"name": "foo", "arguments": {"a": 1}})
        );
    }

    #[test]
    fn test_response_error_envelope() {
        let response: JsonRpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":3,"error":{"code":-32602,"message":"Invalid params"}}"#,
        )
        .unwrap();

        assert!(response.is_error());
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Invalid params");
    }

    #[test]
    fn test_response_success_envelope() {
        let response: JsonRpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":"cli","result":{"tools":[]}}"#).unwrap();

        assert!(!response.is_error());
        assert_eq!(response.id, json!("cli"));
        assert_eq!(response.result, Some(json!({"tools": []})));
    }
}
