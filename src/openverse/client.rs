//! Openverse REST API client.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::OpenverseError;
use super::models::{FetchQuery, SearchQuery, SearchResponse, SearchResultItem};
use super::ImageCatalog;

pub const DEFAULT_BASE_URL: &str = "https://api.openverse.engineering/v1";

/// Client for the Openverse image endpoints.
#[derive(Debug, Clone)]
pub struct OpenverseClient {
    http_client: Client,
    base_url: Url,
}

impl OpenverseClient {
    /// Creates a client against `base_url`, with an optional per-request timeout.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, OpenverseError> {
        let mut builder = Client::builder()
            .pool_idle_timeout(Duration::from_secs(900))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
        })
    }

    /// Parses `base_url` and creates a client without a timeout.
    pub fn from_base_url(base_url: &str) -> Result<Self, OpenverseError> {
        let url = Url::parse(base_url).map_err(|e| OpenverseError::InvalidUrl(e.to_string()))?;
        Self::new(url, None)
    }

    /// `{base}/images`
    fn search_url(&self) -> Result<Url, OpenverseError> {
        self.endpoint(&["images"])
    }

    /// `{base}/images/{id}/`, with `id` kept as a single path segment.
    fn detail_url(&self, id: &str) -> Result<Url, OpenverseError> {
        self.endpoint(&["images", id, ""])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, OpenverseError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| OpenverseError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResultItem>, OpenverseError> {
        let url = self.search_url()?;
        debug!("GET {} q={:?} page={}", url, query.query, query.page());

        let response = self
            .http_client
            .get(url)
            .query(&query.to_query_pairs())
            .send()
            .await
            .map_err(log_transport_error)?;

        let body: SearchResponse = read_json(response).await?;
        let items: Vec<SearchResultItem> = body
            .results
            .into_iter()
            .map(SearchResultItem::from)
            .collect();

        debug!("search for {:?} returned {} results", query.query, items.len());
        Ok(items)
    }

    pub async fn fetch(&self, query: &FetchQuery) -> Result<Value, OpenverseError> {
        let url = self.detail_url(&query.id)?;
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(log_transport_error)?;

        read_json(response).await
    }
}

#[async_trait]
impl ImageCatalog for OpenverseClient {
    async fn search_images(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<SearchResultItem>, OpenverseError> {
        self.search(query).await
    }

    async fn get_image(&self, query: &FetchQuery) -> Result<Value, OpenverseError> {
        self.fetch(query).await
    }
}

fn log_transport_error(err: reqwest::Error) -> OpenverseError {
    error!("Network error during Openverse request: {}", err);
    OpenverseError::Transport(err)
}

/// Checks the status, then parses the body as `T`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, OpenverseError> {
    let status = response.status();
    if !status.is_success() {
        warn!("Openverse API returned {}", status);
        return Err(OpenverseError::Request {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let body = response.text().await.map_err(log_transport_error)?;
    serde_json::from_str(&body).map_err(|e| {
        error!("Failed to parse Openverse response: {}", e);
        OpenverseError::Parse(e.to_string())
    })
}
