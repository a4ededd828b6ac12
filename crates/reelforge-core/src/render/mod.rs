//! Render Boundary
//!
//! Trait and shared types for the external rendering service, plus a mock
//! implementation that records submissions for tests. The core treats the
//! service as opaque: it submits a finalized edit and passes job status
//! through without interpreting it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::timeline::Edit;
use crate::types::JobId;

pub mod shotstack;

pub use shotstack::ShotstackRender;

// =============================================================================
// Shared Types
// =============================================================================

/// Accepted render job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderJob {
    /// Identifier assigned by the render service
    pub id: JobId,
    /// Unix timestamp of the accepted submission
    pub submitted_at: i64,
}

/// Point-in-time job status as reported by the render service. The status
/// string is passed through uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStatus {
    pub id: JobId,
    pub status: String,
    /// Download URL, present once the render completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Service-reported failure detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// =============================================================================
// Trait
// =============================================================================

/// External rendering service collaborator
#[async_trait]
pub trait RenderHost: Send + Sync {
    /// Submits a finalized edit, returning the externally assigned job
    async fn submit(&self, edit: &Edit) -> CoreResult<RenderJob>;

    /// Fetches the current status of a previously submitted job
    async fn status(&self, job_id: &str) -> CoreResult<RenderStatus>;
}

// =============================================================================
// Mock Host for Testing
// =============================================================================

/// Mock render host recording every submission
#[derive(Debug, Default)]
pub struct MockRenderHost {
    submitted: Mutex<Vec<Edit>>,
    fail: bool,
}

impl MockRenderHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host that fails every call with a transport error
    pub fn failing() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Edits submitted so far, in order
    pub async fn submitted(&self) -> Vec<Edit> {
        self.submitted.lock().await.clone()
    }
}

#[async_trait]
impl RenderHost for MockRenderHost {
    async fn submit(&self, edit: &Edit) -> CoreResult<RenderJob> {
        if self.fail {
            return Err(CoreError::Transport(
                "mock render host unavailable".to_string(),
            ));
        }

        self.submitted.lock().await.push(edit.clone());
        Ok(RenderJob {
            id: uuid::Uuid::new_v4().to_string(),
            submitted_at: chrono::Utc::now().timestamp(),
        })
    }

    async fn status(&self, job_id: &str) -> CoreResult<RenderStatus> {
        if self.fail {
            return Err(CoreError::Transport(
                "mock render host unavailable".to_string(),
            ));
        }

        Ok(RenderStatus {
            id: job_id.to_string(),
            status: "queued".to_string(),
            url: None,
            error: None,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
