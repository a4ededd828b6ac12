//! reelforge Error Definitions
//!
//! Defines error types used throughout the project.

use thiserror::Error;

/// Core engine error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed request fields. Raised before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested template id is not in the registry.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Soundtrack key missing from the template's catalog. Request
    /// validation already excludes this; reaching it indicates a
    /// configuration bug.
    #[error("Unknown soundtrack '{key}' for template '{template}'")]
    UnknownSoundtrack { template: String, key: String },

    /// Candidate pool too small to fill the template. User-facing.
    #[error("There are not enough images for '{query}' to create a video ({available} of {required} available)")]
    InsufficientAssets {
        query: String,
        required: usize,
        available: usize,
    },

    /// Computed schedule violates a timing invariant. Indicates a
    /// misconfigured template, fatal for the request.
    #[error("Layout error: {0}")]
    Layout(String),

    /// Failure from the asset-search or render-service network call.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Core engine result type
pub type CoreResult<T> = Result<T, CoreError>;
