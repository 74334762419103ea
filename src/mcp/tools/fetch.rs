//! `fetch` tool - full detail for one image.

use serde_json::json;

use super::registry::ToolDescriptor;
use crate::mcp::content::ToolResult;
use crate::openverse::{FetchQuery, ImageCatalog};

pub const TOOL_NAME: &str = "fetch";

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: "Get detailed information about a specific image".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Openverse image ID (UUID format)"
                }
            },
            "required": ["id"]
        }),
    }
}

pub async fn execute(catalog: &(dyn ImageCatalog + Send + Sync), query: FetchQuery) -> ToolResult {
    match catalog.get_image(&query).await {
        Ok(detail) => ToolResult::json(&detail),
        Err(err) => {
            log::warn!("fetch of image {} failed: {}", query.id, err);
            ToolResult::error(err.to_string())
        }
    }
}
