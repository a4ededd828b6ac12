//! Pexels Photo Search
//!
//! Client for the Pexels photo search API. Maps the provider's response
//! into candidate source assets, preserving provider order.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use super::{MediaSearch, SearchPage, SourceAsset};
use crate::error::{CoreError, CoreResult};

/// Default base URL for the Pexels API
const DEFAULT_BASE_URL: &str = "https://api.pexels.com/v1";

/// Pexels caps per_page at 80
const MAX_PER_PAGE: usize = 80;

// =============================================================================
// API Response Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    total_results: u64,
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSrc,
}

#[derive(Debug, Deserialize)]
struct PhotoSrc {
    original: String,
}

// =============================================================================
// PexelsSearch
// =============================================================================

/// Pexels photo search client
pub struct PexelsSearch {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for PexelsSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PexelsSearch")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PexelsSearch {
    /// Creates a new Pexels client
    pub fn new(api_key: impl Into<String>) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CoreError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Overrides the API base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    fn parse_api_error(status: StatusCode, body: &str) -> CoreError {
        let truncated: String = body.chars().take(200).collect();
        CoreError::Transport(format!("Pexels API error ({}): {}", status, truncated))
    }
}

#[async_trait]
impl MediaSearch for PexelsSearch {
    async fn search_photos(&self, query: &str, limit: usize) -> CoreResult<SearchPage> {
        let per_page = limit.min(MAX_PER_PAGE);

        let resp = self
            .client
            .get(self.search_url())
            .header("Authorization", &self.api_key)
            .query(&[
                ("query", query),
                ("per_page", per_page.to_string().as_str()),
                ("orientation", "landscape"),
            ])
            .send()
            .await
            .map_err(|e| CoreError::Transport(format!("Pexels request failed: {}", e)))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| CoreError::Transport(format!("Failed to read Pexels response: {}", e)))?;

        if !status.is_success() {
            return Err(Self::parse_api_error(status, &body));
        }

        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| CoreError::Transport(format!("Failed to parse Pexels response: {}", e)))?;

        debug!(
            "Pexels search for '{}': {} of {} results returned",
            query,
            parsed.photos.len(),
            parsed.total_results
        );

        Ok(SearchPage {
            total_results: parsed.total_results,
            assets: parsed
                .photos
                .into_iter()
                .map(|photo| SourceAsset::new(photo.src.original))
                .collect(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
