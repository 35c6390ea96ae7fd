//! Google Books volumes API client.
//!
//! Basic volume search works without credentials; an API key can be
//! supplied to raise quota limits.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::SearchCandidate;
use super::{RemoteCatalog, RemoteError};

/// Google Books API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GoogleBooksConfig {
    /// Base URL (default: https://www.googleapis.com/books/v1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Optional API key for higher quota.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Google Books API client.
pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleBooksClient {
    /// Create a new Google Books client.
    pub fn new(config: GoogleBooksConfig) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://www.googleapis.com/books/v1".to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl RemoteCatalog for GoogleBooksClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>, RemoteError> {
        let url = format!("{}/volumes", self.base_url);

        debug!("Google Books search: query='{}'", query);

        let mut request = self.client.get(&url).query(&[("q", query)]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let volumes: VolumesResponse = response.json().await.map_err(|e| {
            RemoteError::Parse(format!("Failed to parse volumes response: {}", e))
        })?;

        let candidates: Vec<SearchCandidate> = volumes
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|v| v.into())
            .collect();

        debug!("Google Books returned {} candidates", candidates.len());

        Ok(candidates)
    }
}

// ============================================================================
// Google Books API response types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    items: Option<Vec<VolumeItem>>,
}

#[derive(Debug, Deserialize)]
struct VolumeItem {
    id: String,
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    description: Option<String>,
    average_rating: Option<f32>,
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

impl From<VolumeItem> for SearchCandidate {
    fn from(v: VolumeItem) -> Self {
        Self {
            external_id: v.id,
            title: v.volume_info.title,
            authors: v.volume_info.authors,
            description: v.volume_info.description,
            average_rating: v.volume_info.average_rating,
            thumbnail_url: v.volume_info.image_links.and_then(|l| l.thumbnail),
        }
    }
}
