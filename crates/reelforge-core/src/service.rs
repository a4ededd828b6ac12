//! Edit Service
//!
//! End-to-end request flow: validate → search → select → compose → submit,
//! plus job status lookup. The search provider, the render host and the
//! random source are injected so the whole flow runs against fakes and a
//! seeded source in tests.

use std::sync::{Arc, Mutex, OnceLock};

use rand::rngs::StdRng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::{Uuid, Version};

use crate::compose;
use crate::error::{CoreError, CoreResult};
use crate::render::{RenderHost, RenderJob, RenderStatus};
use crate::search::MediaSearch;
use crate::template::{Template, TemplateRegistry, TextLimits};

// =============================================================================
// Request
// =============================================================================

/// User request for a new slideshow edit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    /// Image search query
    pub search: String,
    /// Title card text
    pub title: String,
    /// Soundtrack key from the template's catalog
    pub soundtrack: String,
    /// Template id; the catalog default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

fn text_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[a-zA-Z0-9 ]*$").expect("static pattern compiles"))
}

fn validate_text_field(field: &str, value: &str, limits: &TextLimits) -> CoreResult<()> {
    let len = value.chars().count();
    if !limits.contains(len) {
        return Err(CoreError::Validation(format!(
            "'{}' must be between {} and {} characters",
            field, limits.min, limits.max
        )));
    }
    if !text_pattern().is_match(value) {
        return Err(CoreError::Validation(format!(
            "'{}' may only contain letters, numbers and spaces",
            field
        )));
    }
    Ok(())
}

impl EditRequest {
    /// Validates user-supplied fields against the resolved template.
    /// Runs before any network call.
    pub fn validate(&self, template: &Template) -> CoreResult<()> {
        validate_text_field("search", &self.search, &template.text_limits)?;
        validate_text_field("title", &self.title, &template.text_limits)?;

        if template.soundtrack_url(&self.soundtrack).is_none() {
            return Err(CoreError::Validation(format!(
                "'soundtrack' must be one of: {}",
                template.soundtrack_keys().join(", ")
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Service
// =============================================================================

/// Orchestrates one edit request end-to-end
pub struct EditService {
    registry: TemplateRegistry,
    search: Arc<dyn MediaSearch>,
    render: Arc<dyn RenderHost>,
    rng: Mutex<StdRng>,
}

impl EditService {
    /// Creates a service over injected collaborators. The random source
    /// drives randomized asset selection; pass a seeded source for
    /// reproducible runs.
    pub fn new(
        registry: TemplateRegistry,
        search: Arc<dyn MediaSearch>,
        render: Arc<dyn RenderHost>,
        rng: StdRng,
    ) -> Self {
        Self {
            registry,
            search,
            render,
            rng: Mutex::new(rng),
        }
    }

    /// Composes and submits one edit, returning the accepted render job.
    /// Any failure short-circuits; nothing is ever submitted partially.
    pub async fn submit(&self, request: &EditRequest) -> CoreResult<RenderJob> {
        let template = self
            .registry
            .lookup_or_default(request.template.as_deref())?;
        request.validate(template)?;

        let page = self
            .search
            .search_photos(&request.search, template.clip_count)
            .await?;

        if (page.total_results as usize) < template.min_clips {
            warn!(
                "Search for '{}' matched only {} results; template '{}' needs {}",
                request.search, page.total_results, template.id, template.clip_count
            );
            return Err(CoreError::InsufficientAssets {
                query: request.search.clone(),
                required: template.clip_count,
                available: page.total_results as usize,
            });
        }

        let selected = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            compose::select(
                page.assets,
                template.clip_count,
                template.selection,
                &mut *rng,
                &request.search,
            )?
        };

        let edit = compose::compose(template, &request.title, &selected, &request.soundtrack)?;
        let job = self.render.submit(&edit).await?;

        info!(
            "Edit submitted: template={} soundtrack={} job={}",
            template.id, request.soundtrack, job.id
        );
        Ok(job)
    }

    /// Looks up the status of a previously submitted render job
    pub async fn status(&self, job_id: &str) -> CoreResult<RenderStatus> {
        validate_job_id(job_id)?;
        self.render.status(job_id).await
    }
}

/// Job ids are UUIDs assigned by the render service; versions 4 and 5 are
/// accepted.
fn validate_job_id(job_id: &str) -> CoreResult<()> {
    let parsed = Uuid::parse_str(job_id)
        .map_err(|e| CoreError::Validation(format!("'id' must be a UUID: {}", e)))?;

    match parsed.get_version() {
        Some(Version::Random) | Some(Version::Sha1) => Ok(()),
        _ => Err(CoreError::Validation(
            "'id' must be a version 4 or version 5 UUID".to_string(),
        )),
    }
}

// =============================================================================
// Tests
// =============================================================================
