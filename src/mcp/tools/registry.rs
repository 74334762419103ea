//! Tool registry - central routing for MCP tools.
//!
//! Provides `list_tools()` and `call_tool()` per MCP spec. Arguments are
//! deserialized and validated here, before a tool runs.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::mcp::content::ToolResult;
use crate::openverse::{FetchQuery, ImageCatalog, SearchQuery};

use super::fetch;
use super::search;

/// Tool descriptor conforming to MCP specification.
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Failures raised before a tool gets to run.
#[derive(Debug, Error, PartialEq)]
pub enum ToolCallError {
    #[error("Tool '{0}' is not available. Available tools: search, fetch")]
    UnknownTool(String),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Central registry for all MCP tools.
pub struct ToolRegistry {
    catalog: Arc<dyn ImageCatalog + Send + Sync>,
}

impl ToolRegistry {
    pub fn new(catalog: Arc<dyn ImageCatalog + Send + Sync>) -> Self {
        Self { catalog }
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        vec![search::descriptor(), fetch::descriptor()]
    }

    /// Call a tool by name with the given arguments.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<ToolResult, ToolCallError> {
        match name {
            search::TOOL_NAME => {
                let query: SearchQuery = parse_arguments(arguments)?;
                query.validate().map_err(ToolCallError::InvalidArguments)?;
                Ok(search::execute(self.catalog.as_ref(), query).await)
            }
            fetch::TOOL_NAME => {
                let query: FetchQuery = parse_arguments(arguments)?;
                query.validate().map_err(ToolCallError::InvalidArguments)?;
                Ok(fetch::execute(self.catalog.as_ref(), query).await)
            }
            _ => Err(ToolCallError::UnknownTool(name.to_string())),
        }
    }
}

fn parse_arguments<T: DeserializeOwned>(arguments: Option<Value>) -> Result<T, ToolCallError> {
    let value = arguments.unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|err| ToolCallError::InvalidArguments(err.to_string()))
}
