//! Template Models
//!
//! Core data structures for slideshow style templates. A template is
//! immutable after registry construction; the layout engine reads it as
//! plain data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::timeline::{Effect, OutputFormat, Resolution, Transition};
use crate::types::{TemplateId, TimeSec};

/// Placement policy for the trailing luma wipe window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutPolicy {
    /// All image clips keep their full length; each wipe overlays the tail
    /// of its clip on the same track.
    Overlay,
    /// The final image clip is shortened by the luma length and carries no
    /// outgoing wipe.
    Trim,
}

/// How candidate assets are drawn from the search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    /// First `clip_count` candidates in provider order
    Sequential,
    /// `clip_count` candidates sampled without replacement from the first
    /// result page
    RandomSample,
}

/// Inclusive character bounds for user-supplied text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLimits {
    pub min: usize,
    pub max: usize,
}

impl TextLimits {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

/// Title card styling and its transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleStyle {
    /// Render style preset name understood by the render service
    pub style: String,
    /// Text size preset
    pub size: String,
    /// Upper-case the request's title text before rendering
    pub uppercase: bool,
    /// Motion effect on the title card
    pub effect: Option<Effect>,
    pub transition_in: Transition,
    pub transition_out: Transition,
}

/// Rendered output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    pub format: OutputFormat,
    pub resolution: Resolution,
}

/// Named style configuration fixing all timing constants, cycles and layout
/// policy for one video style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    /// Smallest provider-reported corpus this style will accept
    pub min_clips: usize,
    /// Exact number of image clips in the finished timeline
    pub clip_count: usize,
    pub title_length: TimeSec,
    pub clip_length: TimeSec,
    pub luma_length: TimeSec,
    /// Per-clip motion effects, assigned cyclically. May be empty.
    pub effect_cycle: Vec<Effect>,
    /// Luma matte URLs, assigned cyclically to the wipe slots
    pub luma_cycle: Vec<String>,
    /// Soundtrack key → audio URL
    pub soundtracks: HashMap<String, String>,
    pub layout: LayoutPolicy,
    /// Fade the first image clip in
    pub entry_fade: bool,
    pub selection: SelectionMode,
    pub title: TitleStyle,
    pub text_limits: TextLimits,
    pub output: OutputSpec,
}

impl Template {
    /// Motion effect for the image clip at `index`, cycling through the
    /// template's effect list. None when the template defines no effects.
    pub fn effect_for(&self, index: usize) -> Option<Effect> {
        if self.effect_cycle.is_empty() {
            return None;
        }
        Some(self.effect_cycle[index % self.effect_cycle.len()])
    }

    /// Luma matte for the wipe trailing the image clip at `index`
    pub fn luma_for(&self, index: usize) -> Option<&str> {
        if self.luma_cycle.is_empty() {
            return None;
        }
        Some(self.luma_cycle[index % self.luma_cycle.len()].as_str())
    }

    /// Audio URL for a soundtrack key
    pub fn soundtrack_url(&self, key: &str) -> Option<&str> {
        self.soundtracks.get(key).map(String::as_str)
    }

    /// Sorted soundtrack keys, for display and error messages
    pub fn soundtrack_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.soundtracks.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
