//! MCP (Model Context Protocol) Module
//!
//! JSON-RPC 2.0 over stdio or stateless HTTP, exposing the Openverse tools.

pub mod content;
pub mod handlers;
pub mod rpc;
pub mod service;
pub mod stdio;
pub mod tools;

pub use handlers::{config, McpState};
pub use service::McpService;
