//! Media Search Boundary
//!
//! Trait and shared types for the external image search collaborator, plus
//! a mock implementation for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub mod pexels;

pub use pexels::PexelsSearch;

// =============================================================================
// Shared Types
// =============================================================================

/// A candidate media file offered by the search provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceAsset {
    /// Opaque URL of the media file
    pub src: String,
}

impl SourceAsset {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}

/// One page of search results
#[derive(Debug, Clone)]
pub struct SearchPage {
    /// Total matches the provider reports for the query, across all pages
    pub total_results: u64,
    /// Candidates on this page, in provider order
    pub assets: Vec<SourceAsset>,
}

// =============================================================================
// Trait
// =============================================================================

/// External image search collaborator
#[async_trait]
pub trait MediaSearch: Send + Sync {
    /// Searches for landscape photos matching `query`, returning at most
    /// `limit` candidates from the first result page.
    async fn search_photos(&self, query: &str, limit: usize) -> CoreResult<SearchPage>;
}

// =============================================================================
// Mock Provider for Testing
// =============================================================================

/// Mock search provider for tests
#[derive(Debug, Default)]
pub struct MockMediaSearch {
    assets: Vec<SourceAsset>,
    total_results: u64,
    fail: bool,
    calls: AtomicUsize,
}

impl MockMediaSearch {
    /// Creates a provider whose corpus is exactly `assets`
    pub fn new(assets: Vec<SourceAsset>) -> Self {
        let total_results = assets.len() as u64;
        Self {
            assets,
            total_results,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates a provider with `count` generated candidates
    pub fn with_asset_count(count: usize) -> Self {
        let assets = (0..count)
            .map(|i| SourceAsset::new(format!("https://images.example.com/photo-{}.jpg", i)))
            .collect();
        Self::new(assets)
    }

    /// Overrides the reported total, independent of the page contents
    pub fn with_total_results(mut self, total_results: u64) -> Self {
        self.total_results = total_results;
        self
    }

    /// Creates a provider that fails every call with a transport error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of search calls made against this mock
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaSearch for MockMediaSearch {
    async fn search_photos(&self, _query: &str, limit: usize) -> CoreResult<SearchPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(CoreError::Transport(
                "mock search provider unavailable".to_string(),
            ));
        }

        Ok(SearchPage {
            total_results: self.total_results,
            assets: self.assets.iter().take(limit).cloned().collect(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
