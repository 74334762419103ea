//! `search` tool - openly-licensed image search.

use serde_json::json;

use super::registry::ToolDescriptor;
use crate::mcp::content::ToolResult;
use crate::openverse::{ImageCatalog, SearchQuery};

pub const TOOL_NAME: &str = "search";

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: "Search for openly-licensed images on Openverse".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search terms (required)"
                },
                "page": {
                    "type": "integer",
                    "description": "Page number (default: 1)"
                },
                "page_size": {
                    "type": "integer",
                    "description": "Results per page (default: 20, max: 500)"
                },
                "license_type": {
                    "type": "string",
                    "description": "License type (commercial or modification)"
                },
                "license": {
                    "type": "string",
                    "description": "License filter (e.g., by, by-sa, cc0)"
                },
                "source": {
                    "type": "string",
                    "description": "Filter by source (e.g., flickr, wikimedia)"
                },
                "creator": {
                    "type": "string",
                    "description": "Filter by creator name"
                },
                "extension": {
                    "type": "string",
                    "description": "File type (jpg, png, gif, svg)"
                },
                "aspect_ratio": {
                    "type": "string",
                    "description": "Image shape (tall, wide, square)"
                },
                "size": {
                    "type": "string",
                    "description": "Image size (small, medium, large)"
                },
                "mature": {
                    "type": "boolean",
                    "description": "Include mature content (default: false)"
                }
            },
            "required": ["query"]
        }),
    }
}

/// Runs a validated search and renders the compact hit list.
pub async fn execute(catalog: &(dyn ImageCatalog + Send + Sync), query: SearchQuery) -> ToolResult {
    match catalog.search_images(&query).await {
        Ok(items) => ToolResult::json(&items),
        Err(err) => {
            log::warn!("search for {:?} failed: {}", query.query, err);
            ToolResult::error(err.to_string())
        }
    }
}
