//! Shotstack Edit API Client
//!
//! Submits finalized edits to the Shotstack render endpoint and looks up
//! job status. Each call issues exactly one attempt; retry policy belongs
//! to the deployment, not the core.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info};

use super::{RenderHost, RenderJob, RenderStatus};
use crate::error::{CoreError, CoreResult};
use crate::timeline::Edit;

/// Default base URL for the Shotstack Edit API
const DEFAULT_BASE_URL: &str = "https://api.shotstack.io/v1";

// =============================================================================
// API Response Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SubmitEnvelope {
    response: SubmitResponse,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    response: StatusResponse,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    id: String,
    status: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

// =============================================================================
// ShotstackRender
// =============================================================================

/// Shotstack render service client
pub struct ShotstackRender {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for ShotstackRender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShotstackRender")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ShotstackRender {
    /// Creates a new Shotstack client
    pub fn new(api_key: impl Into<String>) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| CoreError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Overrides the API base URL (e.g. the staging host)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn render_url(&self) -> String {
        format!("{}/render", self.base_url)
    }

    fn status_url(&self, job_id: &str) -> String {
        format!("{}/render/{}", self.base_url, job_id)
    }

    fn parse_api_error(status: StatusCode, body: &str) -> CoreError {
        let truncated: String = body.chars().take(200).collect();
        CoreError::Transport(format!("Shotstack API error ({}): {}", status, truncated))
    }
}

#[async_trait]
impl RenderHost for ShotstackRender {
    async fn submit(&self, edit: &Edit) -> CoreResult<RenderJob> {
        let resp = self
            .client
            .post(self.render_url())
            .header("x-api-key", &self.api_key)
            .json(edit)
            .send()
            .await
            .map_err(|e| CoreError::Transport(format!("Render submission failed: {}", e)))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            CoreError::Transport(format!("Failed to read render response: {}", e))
        })?;

        if !status.is_success() {
            return Err(Self::parse_api_error(status, &body));
        }

        let parsed: SubmitEnvelope = serde_json::from_str(&body).map_err(|e| {
            CoreError::Transport(format!("Failed to parse render response: {}", e))
        })?;

        info!("Render job submitted: id={}", parsed.response.id);

        Ok(RenderJob {
            id: parsed.response.id,
            submitted_at: chrono::Utc::now().timestamp(),
        })
    }

    async fn status(&self, job_id: &str) -> CoreResult<RenderStatus> {
        let resp = self
            .client
            .get(self.status_url(job_id))
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| CoreError::Transport(format!("Status request failed: {}", e)))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            CoreError::Transport(format!("Failed to read status response: {}", e))
        })?;

        if !status.is_success() {
            return Err(Self::parse_api_error(status, &body));
        }

        let parsed: StatusEnvelope = serde_json::from_str(&body).map_err(|e| {
            CoreError::Transport(format!("Failed to parse status response: {}", e))
        })?;

        debug!(
            "Render job {} status: {}",
            parsed.response.id, parsed.response.status
        );

        Ok(RenderStatus {
            id: parsed.response.id,
            status: parsed.response.status,
            url: parsed.response.url,
            error: parsed.response.error,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
