use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use openverse_mcp_server::mcp::tools::ToolRegistry;
use openverse_mcp_server::mcp::McpService;
use openverse_mcp_server::openverse::{
    FetchQuery, ImageCatalog, OpenverseError, SearchQuery, SearchResultItem,
};

/// In-memory catalog with one known image, `abc`.
pub struct StubCatalog {
    pub search_delay: Duration,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self {
            search_delay: Duration::ZERO,
        }
    }
}

#[async_trait]
impl ImageCatalog for StubCatalog {
    async fn search_images(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<SearchResultItem>, OpenverseError> {
        tokio::time::sleep(self.search_delay).await;
        Ok(vec![SearchResultItem {
            id: "abc".to_string(),
            title: format!("Result for {}", query.query),
            url: json!("https://example.org/abc.jpg"),
            thumbnail: json!("https://example.org/abc_thumb.jpg"),
            width: json!(640),
            height: json!(480),
        }])
    }

    async fn get_image(&self, query: &FetchQuery) -> Result<Value, OpenverseError> {
        match query.id.as_str() {
            "abc" => Ok(json!({ "id": "abc", "title": "Cat", "license": "by" })),
            _ => Err(OpenverseError::Request {
                status: 404,
                reason: "Not Found".to_string(),
            }),
        }
    }
}

pub fn stub_service(catalog: StubCatalog) -> McpService {
    McpService::new(ToolRegistry::new(Arc::new(catalog)))
}
