//! MCP Tools module - defines tools exposed via JSON-RPC.
//!
//! Each tool provides:
//! - Tool descriptor (name, description, input schema)
//! - Execution against the image catalog and result formatting

pub mod fetch;
pub mod registry;
pub mod search;

pub use registry::{ToolCallError, ToolDescriptor, ToolRegistry};
