//! Content types for MCP tool results.

use serde::{Deserialize, Serialize};

/// Content item in tool result (MCP spec compatible).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Result of a tool call (MCP spec compatible).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(content: Vec<ContentItem>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(message)],
            is_error: true,
        }
    }

    /// Success result carrying `value` as pretty-printed JSON text.
    pub fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self::success(vec![ContentItem::text(text)]),
            Err(err) => Self::error(format!("failed to encode result: {err}")),
        }
    }

    /// Text of the first content item, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|item| item.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_result_error() {
        let result = ToolResult::error("Something went wrong");
        assert!(result.is_error);
        assert_eq!(result.first_text(), Some("Something went wrong"));
    }

    #[test]
    fn test_json_result_is_pretty_text() {
        let result = ToolResult::json(&json!([{ "id": "abc" }]));
        assert!(!result.is_error);
        let text = result.first_text().unwrap();
        assert!(text.contains('\n'));
        assert_eq!(serde_json::from_str::<serde_json::Value>(text).unwrap(), json!([{ "id": "abc" }]));
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(ToolResult::success(vec![ContentItem::text("hi")])).unwrap();
        assert_eq!(
            value,
            json!({ "content": [{ "type": "text", "text": "hi" }], "isError": false })
        );
    }
}
