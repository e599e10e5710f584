//! Transport layer for the mcp-call SDK.

pub mod http;

pub use http::{HttpTransport, TransportResult};
