//! Template Registry
//!
//! Static catalog of builtin style templates. Built once at startup and
//! read-only afterwards, so it is safe for unlimited concurrent reads.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::timeline::{Effect, OutputFormat, Resolution, Transition};
use crate::types::TemplateId;

use super::models::{
    LayoutPolicy, OutputSpec, SelectionMode, Template, TextLimits, TitleStyle,
};

/// Base URL for the shared stock assets (luma mattes, soundtracks)
const ASSET_BASE: &str = "https://shotstack-assets.s3-ap-southeast-2.amazonaws.com";

/// Template used when a request names none
const DEFAULT_TEMPLATE: &str = "classic";

const SOUNDTRACK_KEYS: [&str; 6] = [
    "disco",
    "freeflow",
    "melodic",
    "lit",
    "ambisax",
    "palmtrees",
];

const CIRCLE_MATTES: [&str; 6] = [
    "center-double-invert",
    "center-double",
    "center-small-to-large",
    "circle-half-left",
    "circle-half-right",
    "enter-large-to-small",
];

fn soundtrack_map() -> HashMap<String, String> {
    SOUNDTRACK_KEYS
        .iter()
        .map(|key| {
            (
                key.to_string(),
                format!("{}/music/{}.mp3", ASSET_BASE, key),
            )
        })
        .collect()
}

fn circle_matte_cycle() -> Vec<String> {
    CIRCLE_MATTES
        .iter()
        .map(|name| format!("{}/luma-mattes/circles/{}.mp4", ASSET_BASE, name))
        .collect()
}

fn full_effect_cycle() -> Vec<Effect> {
    vec![
        Effect::ZoomIn,
        Effect::SlideUp,
        Effect::SlideLeft,
        Effect::ZoomOut,
        Effect::SlideDown,
        Effect::SlideRight,
    ]
}

/// Catalog of named style templates
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: HashMap<TemplateId, Template>,
}

impl TemplateRegistry {
    /// Builds the builtin catalog
    pub fn builtin() -> Self {
        let mut registry = Self {
            templates: HashMap::new(),
        };
        for template in [classic(), showcase(), shuffle(), minimal()] {
            registry.templates.insert(template.id.clone(), template);
        }
        registry
    }

    /// Adds or replaces a template
    pub fn with_template(mut self, template: Template) -> Self {
        self.templates.insert(template.id.clone(), template);
        self
    }

    /// Resolves a template id
    pub fn lookup(&self, id: &str) -> CoreResult<&Template> {
        self.templates
            .get(id)
            .ok_or_else(|| CoreError::UnknownTemplate(id.to_string()))
    }

    /// Resolves a template id, falling back to the catalog default
    pub fn lookup_or_default(&self, id: Option<&str>) -> CoreResult<&Template> {
        self.lookup(id.unwrap_or(DEFAULT_TEMPLATE))
    }

    /// Sorted template ids
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

// =============================================================================
// Builtin Templates
// =============================================================================

/// The original slideshow style: short title card, full-length image clips
/// with the wipe overlaying each clip's tail.
fn classic() -> Template {
    Template {
        id: "classic".to_string(),
        min_clips: 4,
        clip_count: 6,
        title_length: 3.0,
        clip_length: 4.0,
        luma_length: 2.0,
        effect_cycle: full_effect_cycle(),
        luma_cycle: circle_matte_cycle(),
        soundtracks: soundtrack_map(),
        layout: LayoutPolicy::Overlay,
        entry_fade: false,
        selection: SelectionMode::Sequential,
        title: TitleStyle {
            style: "chunk".to_string(),
            size: "small".to_string(),
            uppercase: false,
            effect: Some(Effect::ZoomIn),
            transition_in: Transition::Fade,
            transition_out: Transition::Fade,
        },
        text_limits: TextLimits::new(2, 30),
        output: OutputSpec {
            format: OutputFormat::Mp4,
            resolution: Resolution::Sd,
        },
    }
}

/// Longer-form style with an upper-cased sliding title and the final clip
/// trimmed instead of overlaid.
fn showcase() -> Template {
    Template {
        id: "showcase".to_string(),
        min_clips: 6,
        clip_count: 8,
        title_length: 6.0,
        clip_length: 7.0,
        luma_length: 2.0,
        effect_cycle: vec![],
        luma_cycle: circle_matte_cycle(),
        soundtracks: soundtrack_map(),
        layout: LayoutPolicy::Trim,
        entry_fade: true,
        selection: SelectionMode::Sequential,
        title: TitleStyle {
            style: "blockbuster".to_string(),
            size: "medium".to_string(),
            uppercase: true,
            effect: None,
            transition_in: Transition::SlideRight,
            transition_out: Transition::SlideLeft,
        },
        text_limits: TextLimits::new(2, 20),
        output: OutputSpec {
            format: OutputFormat::Mp4,
            resolution: Resolution::Hd,
        },
    }
}

/// Same schedule as `classic`, with the images sampled at random from the
/// first result page instead of taken in provider order.
fn shuffle() -> Template {
    Template {
        id: "shuffle".to_string(),
        selection: SelectionMode::RandomSample,
        ..classic()
    }
}

/// Compact randomized style with a two-effect cycle and a trimmed ending
fn minimal() -> Template {
    Template {
        id: "minimal".to_string(),
        min_clips: 4,
        clip_count: 5,
        title_length: 4.0,
        clip_length: 5.0,
        luma_length: 2.0,
        effect_cycle: vec![Effect::ZoomIn, Effect::ZoomOut],
        luma_cycle: circle_matte_cycle(),
        soundtracks: soundtrack_map(),
        layout: LayoutPolicy::Trim,
        entry_fade: true,
        selection: SelectionMode::RandomSample,
        title: TitleStyle {
            style: "minimal".to_string(),
            size: "small".to_string(),
            uppercase: false,
            effect: None,
            transition_in: Transition::Fade,
            transition_out: Transition::Fade,
        },
        text_limits: TextLimits::new(2, 30),
        output: OutputSpec {
            format: OutputFormat::Mp4,
            resolution: Resolution::Sd,
        },
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.ids(), vec!["classic", "minimal", "showcase", "shuffle"]);
    }

    #[test]
    fn test_lookup_unknown_template() {
        let registry = TemplateRegistry::builtin();
        let err = registry.lookup("vaporwave").unwrap_err();
        assert!(matches!(err, CoreError::UnknownTemplate(id) if id == "vaporwave"));
    }

    #[test]
    fn test_lookup_or_default() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.lookup_or_default(None).unwrap().id, "classic");
        assert_eq!(
            registry.lookup_or_default(Some("showcase")).unwrap().id,
            "showcase"
        );
        assert!(registry.lookup_or_default(Some("nope")).is_err());
    }

    #[test]
    fn test_with_template_overrides() {
        let mut custom = classic();
        custom.id = "custom".to_string();
        custom.clip_count = 3;

        let registry = TemplateRegistry::builtin().with_template(custom);
        assert_eq!(registry.lookup("custom").unwrap().clip_count, 3);
    }

    #[test]
    fn test_every_template_is_coherent() {
        let registry = TemplateRegistry::builtin();
        for id in registry.ids() {
            let template = registry.lookup(id).unwrap();
            assert!(template.clip_count >= 1, "{}", id);
            assert!(template.min_clips <= template.clip_count, "{}", id);
            assert!(template.title_length > 0.0, "{}", id);
            assert!(template.luma_length > 0.0, "{}", id);
            // The wipe window must fit inside a clip, including a trimmed one.
            assert!(template.clip_length > template.luma_length, "{}", id);
            assert!(!template.luma_cycle.is_empty(), "{}", id);
            assert_eq!(template.soundtrack_keys().len(), 6, "{}", id);
            assert!(template.text_limits.min >= 2, "{}", id);
        }
    }

    #[test]
    fn test_soundtrack_urls_follow_asset_base() {
        let registry = TemplateRegistry::builtin();
        let template = registry.lookup("classic").unwrap();
        let url = template.soundtrack_url("disco").unwrap();
        assert_eq!(
            url,
            "https://shotstack-assets.s3-ap-southeast-2.amazonaws.com/music/disco.mp3"
        );
    }

    #[test]
    fn test_shuffle_only_differs_in_selection() {
        let registry = TemplateRegistry::builtin();
        let classic = registry.lookup("classic").unwrap();
        let shuffle = registry.lookup("shuffle").unwrap();
        assert_eq!(shuffle.selection, SelectionMode::RandomSample);
        assert_eq!(classic.selection, SelectionMode::Sequential);
        assert_eq!(shuffle.clip_count, classic.clip_count);
        assert_eq!(shuffle.layout, classic.layout);
    }
}
