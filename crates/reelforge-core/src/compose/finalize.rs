//! Timeline Finalizer
//!
//! Attaches soundtrack, background and output specification to the
//! assembled tracks, producing the render-request payload.

use crate::error::{CoreError, CoreResult};
use crate::template::Template;
use crate::timeline::{Edit, Output, Soundtrack, SoundtrackEffect, Timeline, Track};

/// Compositing background behind and between clips
const BACKGROUND: &str = "#000000";

/// Produces the complete render-request payload. The soundtrack key is
/// resolved against the template's catalog; request validation already
/// guarantees the key, so a miss here is a configuration bug.
pub fn finalize(template: &Template, tracks: Vec<Track>, soundtrack: &str) -> CoreResult<Edit> {
    let src = template
        .soundtrack_url(soundtrack)
        .ok_or_else(|| CoreError::UnknownSoundtrack {
            template: template.id.clone(),
            key: soundtrack.to_string(),
        })?;

    Ok(Edit {
        timeline: Timeline {
            soundtrack: Soundtrack {
                src: src.to_string(),
                effect: SoundtrackEffect::FadeOut,
            },
            background: BACKGROUND.to_string(),
            tracks,
        },
        output: Output {
            format: template.output.format,
            resolution: template.output.resolution,
        },
    })
}

// =============================================================================
// Tests
// =============================================================================
