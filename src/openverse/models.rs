//! Request and response shapes for the Openverse image endpoints.
//!
//! `SearchQuery` and `FetchQuery` are deserialized straight from tool
//! arguments and validated once before any upstream call is made.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 500;

// =============================================================================
// Search
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
    #[serde(default)]
    pub license_type: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub mature: Option<bool>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: None,
            page_size: None,
            license_type: None,
            license: None,
            source: None,
            creator: None,
            extension: None,
            aspect_ratio: None,
            size: None,
            mature: None,
        }
    }

    /// Requested page; an absent or null argument means the first page.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Requested page size before clamping.
    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn mature(&self) -> bool {
        self.mature.unwrap_or(false)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.query.trim().is_empty() {
            return Err("query must not be empty".to_string());
        }
        if self.page() < 1 {
            return Err("page must be at least 1".to_string());
        }
        if self.page_size() < 1 {
            return Err("page_size must be at least 1".to_string());
        }
        Ok(())
    }

    /// Page size actually sent upstream.
    pub fn effective_page_size(&self) -> i64 {
        self.page_size().min(MAX_PAGE_SIZE)
    }

    /// Builds the outbound query string pairs. Absent or empty filters are
    /// left out entirely.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.query.clone()),
            ("page", self.page().to_string()),
            ("page_size", self.effective_page_size().to_string()),
            ("mature", self.mature().to_string()),
        ];

        let filters = [
            ("license_type", &self.license_type),
            ("license", &self.license),
            ("creator", &self.creator),
            ("source", &self.source),
            ("extension", &self.extension),
            ("aspect_ratio", &self.aspect_ratio),
            ("size", &self.size),
        ];

        for (key, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, value.to_string()));
            }
        }

        pairs
    }
}

/// Raw image record as returned inside the search `results` list.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub creator: Value,
    #[serde(default)]
    pub url: Value,
    #[serde(default)]
    pub thumbnail: Value,
    #[serde(default)]
    pub width: Value,
    #[serde(default)]
    pub height: Value,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ImageRecord>,
}

/// Compact search hit returned by the `search` tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub url: Value,
    pub thumbnail: Value,
    pub width: Value,
    pub height: Value,
}

impl From<ImageRecord> for SearchResultItem {
    fn from(record: ImageRecord) -> Self {
        let title = display_title(&record.title, &record.creator, &record.id);
        Self {
            id: record.id,
            title,
            url: record.url,
            thumbnail: record.thumbnail,
            width: record.width,
            height: record.height,
        }
    }
}

/// Title shown for a hit: its own title, else the creator, else the id.
/// Only null or missing values fall through.
pub fn display_title(title: &Value, creator: &Value, id: &str) -> String {
    as_text(title)
        .or_else(|| as_text(creator))
        .unwrap_or_else(|| id.to_string())
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

// =============================================================================
// Fetch
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FetchQuery {
    pub id: String,
}

impl FetchQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id must not be empty".to_string());
        }
        Ok(())
    }
}
