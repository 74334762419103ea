//! Openverse module - the upstream image search service.
//!
//! - `models` - query and result shapes plus their mapping functions
//! - `client` - reqwest-backed HTTP client
//! - `error` - upstream error taxonomy

pub mod client;
pub mod error;
pub mod models;

use async_trait::async_trait;
use serde_json::Value;

pub use client::{OpenverseClient, DEFAULT_BASE_URL};
pub use error::OpenverseError;
pub use models::{FetchQuery, SearchQuery, SearchResultItem};

/// Source of image search results and image details.
#[async_trait]
pub trait ImageCatalog {
    /// Runs one page of an image search.
    async fn search_images(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<SearchResultItem>, OpenverseError>;

    /// Returns the full detail record for one image, unmodified.
    async fn get_image(&self, query: &FetchQuery) -> Result<Value, OpenverseError>;
}
