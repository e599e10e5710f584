//! # mcp-call SDK
//!
//! Sends one JSON-RPC 2.0 request to an MCP server over HTTP and renders the
//! reply for a human.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mcp_call_core::{ArgumentMap, EnvDefaults, RequestBuilder};
//! use mcp_call_sdk::{render, McpCallClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let args = ArgumentMap::parse(["--url", "http://localhost:8081", "--method", "tools/list"]);
//! let plan = RequestBuilder::new(&args, &EnvDefaults::from_env()).build()?;
//!
//! let client = McpCallClient::from_plan(&plan)?;
//! let reply = client.call(&plan.request).await?;
//! println!("{}", render::render(&reply.body));
//! # Ok(())
//! # }
//! ```
//!
//! The reply is returned whatever its HTTP status or JSON-RPC outcome; only
//! failures to reach the server are errors.

pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod transport;

// Re-export main client
pub use client::{McpCallClient, McpCallClientBuilder};
pub use config::ClientConfig;
pub use error::{SdkError, SdkResult};
pub use transport::TransportResult;
