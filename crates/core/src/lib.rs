// Core types for mcp-call: argument parsing, environment defaults,
// JSON-RPC envelopes and request construction.

pub mod args;
pub mod config;
pub mod error;
pub mod protocol;
pub mod request;

pub use args::ArgumentMap;
pub use config::EnvDefaults;
pub use error::{InputError, InputResult};
pub use protocol::{CallToolParams, JsonObject, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use request::{CallPlan, RequestBuilder};
