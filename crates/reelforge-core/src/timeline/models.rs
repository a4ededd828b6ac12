//! Edit Payload Models
//!
//! Defines Edit, Timeline, Track, Clip and related types. Field names, the
//! tagged asset representation and the omitted-when-absent optionals match
//! the render service's JSON schema exactly.

use serde::{Deserialize, Serialize};

use crate::types::TimeSec;

// =============================================================================
// Effects and Transitions
// =============================================================================

/// Pan/zoom motion effect applied to a clip for its whole duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Effect {
    ZoomIn,
    ZoomOut,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
}

/// Transition style for one edge of a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transition {
    Fade,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
}

/// In/out transition pair. Either side may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionPair {
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub transition_in: Option<Transition>,
    #[serde(rename = "out", skip_serializing_if = "Option::is_none")]
    pub transition_out: Option<Transition>,
}

impl TransitionPair {
    pub fn new(transition_in: Option<Transition>, transition_out: Option<Transition>) -> Self {
        Self {
            transition_in,
            transition_out,
        }
    }

    /// Returns true when neither edge carries a transition
    pub fn is_empty(&self) -> bool {
        self.transition_in.is_none() && self.transition_out.is_none()
    }
}

// =============================================================================
// Assets
// =============================================================================

/// Media reference carried by a clip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AssetSource {
    /// Rendered title card
    Title {
        text: String,
        style: String,
        size: String,
    },
    /// Still image sourced from the search provider
    Image { src: String },
    /// Luma matte whose brightness pattern drives a cross-fade
    Luma { src: String },
}

// =============================================================================
// Clip and Track
// =============================================================================

/// A single timed appearance of one asset on a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub asset: AssetSource,
    pub start: TimeSec,
    pub length: TimeSec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionPair>,
}

/// An ordered, independently-composited layer of clips. Track index defines
/// visual stacking order: track 0 renders above all later tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub clips: Vec<Clip>,
}

impl Track {
    pub fn new(clips: Vec<Clip>) -> Self {
        Self { clips }
    }
}

// =============================================================================
// Soundtrack
// =============================================================================

/// Volume envelope applied to the soundtrack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundtrackEffect {
    FadeIn,
    FadeOut,
    FadeInFadeOut,
}

/// Background music playing under the whole timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Soundtrack {
    pub src: String,
    pub effect: SoundtrackEffect,
}

// =============================================================================
// Timeline and Output
// =============================================================================

/// Complete edit description: soundtrack, background and ordered tracks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub soundtrack: Soundtrack,
    /// Background color shown behind and between clips
    pub background: String,
    pub tracks: Vec<Track>,
}

/// Container format of the rendered file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Mp4,
    Gif,
}

/// Rendered resolution preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Preview,
    Mobile,
    Sd,
    Hd,
    #[serde(rename = "1080")]
    Fhd,
}

/// Output file specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub format: OutputFormat,
    pub resolution: Resolution,
}

/// Render-request payload: a timeline plus its output specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edit {
    pub timeline: Timeline,
    pub output: Output,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_source_tagged_serialization() {
        let title = AssetSource::Title {
            text: "Hello".to_string(),
            style: "chunk".to_string(),
            size: "small".to_string(),
        };
        let json = serde_json::to_value(&title).unwrap();
        assert_eq!(json["type"], "title");
        assert_eq!(json["text"], "Hello");

        let image = AssetSource::Image {
            src: "https://example.com/a.jpg".to_string(),
        };
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["src"], "https://example.com/a.jpg");

        let luma = AssetSource::Luma {
            src: "https://example.com/m.mp4".to_string(),
        };
        let json = serde_json::to_value(&luma).unwrap();
        assert_eq!(json["type"], "luma");
    }

    #[test]
    fn test_transition_pair_uses_in_out_keys() {
        let pair = TransitionPair::new(Some(Transition::Fade), Some(Transition::SlideLeft));
        let json = serde_json::to_value(pair).unwrap();
        assert_eq!(json["in"], "fade");
        assert_eq!(json["out"], "slideLeft");

        let out_only = TransitionPair::new(None, Some(Transition::Fade));
        let json = serde_json::to_value(out_only).unwrap();
        assert!(json.get("in").is_none());
        assert_eq!(json["out"], "fade");
    }

    #[test]
    fn test_clip_omits_absent_optionals() {
        let clip = Clip {
            asset: AssetSource::Luma {
                src: "https://example.com/m.mp4".to_string(),
            },
            start: 5.0,
            length: 2.0,
            effect: None,
            transition: None,
        };
        let json = serde_json::to_value(&clip).unwrap();
        assert!(json.get("effect").is_none());
        assert!(json.get("transition").is_none());
        assert_eq!(json["start"], 5.0);
        assert_eq!(json["length"], 2.0);
    }

    #[test]
    fn test_effect_and_resolution_wire_names() {
        assert_eq!(serde_json::to_string(&Effect::ZoomIn).unwrap(), "\"zoomIn\"");
        assert_eq!(
            serde_json::to_string(&Effect::SlideRight).unwrap(),
            "\"slideRight\""
        );
        assert_eq!(serde_json::to_string(&Resolution::Sd).unwrap(), "\"sd\"");
        assert_eq!(serde_json::to_string(&Resolution::Fhd).unwrap(), "\"1080\"");
        assert_eq!(
            serde_json::to_string(&SoundtrackEffect::FadeOut).unwrap(),
            "\"fadeOut\""
        );
    }

    #[test]
    fn test_edit_round_trip() {
        let edit = Edit {
            timeline: Timeline {
                soundtrack: Soundtrack {
                    src: "https://example.com/music/disco.mp3".to_string(),
                    effect: SoundtrackEffect::FadeOut,
                },
                background: "#000000".to_string(),
                tracks: vec![Track::new(vec![Clip {
                    asset: AssetSource::Image {
                        src: "https://example.com/a.jpg".to_string(),
                    },
                    start: 3.0,
                    length: 4.0,
                    effect: Some(Effect::ZoomIn),
                    transition: Some(TransitionPair::new(None, Some(Transition::Fade))),
                }])],
            },
            output: Output {
                format: OutputFormat::Mp4,
                resolution: Resolution::Sd,
            },
        };

        let json = serde_json::to_string(&edit).unwrap();
        let parsed: Edit = serde_json::from_str(&json).unwrap();
        assert_eq!(edit, parsed);
    }
}
