//! Clip Layout Engine
//!
//! Computes the exact schedule for every clip of an edit: the title card,
//! one image slot per selected asset, and the trailing luma wipe windows
//! that cross-fade neighboring slots. Successive image clips overlap by the
//! template's luma length so each wipe plays out over the incoming clip.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::search::SourceAsset;
use crate::template::{LayoutPolicy, Template};
use crate::timeline::{Effect, Transition};
use crate::types::TimeSec;

// =============================================================================
// Schedule Records
// =============================================================================

/// Schedule for the single title card on track 0
#[derive(Debug, Clone, PartialEq)]
pub struct TitleSlot {
    pub start: TimeSec,
    pub length: TimeSec,
    pub effect: Option<Effect>,
    pub transition_in: Transition,
    pub transition_out: Transition,
}

/// Trailing luma wipe window inside an image slot
#[derive(Debug, Clone, PartialEq)]
pub struct LumaSlot {
    pub src: String,
    pub start: TimeSec,
    pub length: TimeSec,
}

/// Schedule for one selected image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSlot {
    pub src: String,
    pub start: TimeSec,
    pub length: TimeSec,
    pub effect: Option<Effect>,
    pub transition_in: Option<Transition>,
    pub transition_out: Option<Transition>,
    /// Wipe into the successor; absent on the final slot
    pub wipe: Option<LumaSlot>,
}

/// Complete per-asset schedule for one edit
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub title: TitleSlot,
    pub images: Vec<ImageSlot>,
}

// =============================================================================
// Layout
// =============================================================================

/// Computes the clip schedule for `template` over exactly
/// `template.clip_count` selected assets, in selection order.
pub fn layout(template: &Template, assets: &[SourceAsset]) -> CoreResult<LayoutPlan> {
    if template.clip_count == 0 {
        return Err(CoreError::Layout(format!(
            "template '{}' schedules no image clips",
            template.id
        )));
    }
    if assets.len() != template.clip_count {
        return Err(CoreError::Layout(format!(
            "template '{}' schedules {} clips but {} assets were selected",
            template.id,
            template.clip_count,
            assets.len()
        )));
    }
    if template.title_length <= 0.0 {
        return Err(CoreError::Layout(format!(
            "template '{}' has a non-positive title length",
            template.id
        )));
    }

    let title = TitleSlot {
        start: 0.0,
        length: template.title_length,
        effect: template.title.effect,
        transition_in: template.title.transition_in,
        transition_out: template.title.transition_out,
    };

    let last = template.clip_count - 1;
    let mut images = Vec::with_capacity(assets.len());

    for (index, asset) in assets.iter().enumerate() {
        let i = index as f64;
        let start = template.title_length + i * template.clip_length - i * template.luma_length;

        let length = if template.layout == LayoutPolicy::Trim && index == last {
            template.clip_length - template.luma_length
        } else {
            template.clip_length
        };

        if start < 0.0 {
            return Err(CoreError::Layout(format!(
                "clip {} of template '{}' starts at {}",
                index, template.id, start
            )));
        }
        if length <= 0.0 {
            return Err(CoreError::Layout(format!(
                "clip {} of template '{}' has length {}",
                index, template.id, length
            )));
        }

        let transition_in = (index == 0 && template.entry_fade).then_some(Transition::Fade);
        let transition_out = (index == last).then_some(Transition::Fade);

        let wipe = if index < last {
            Some(wipe_slot(template, index, start, length)?)
        } else {
            None
        };

        images.push(ImageSlot {
            src: asset.src.clone(),
            start,
            length,
            effect: template.effect_for(index),
            transition_in,
            transition_out,
            wipe,
        });
    }

    debug!(
        "Computed layout for template '{}': {} image clips over {}s",
        template.id,
        images.len(),
        images
            .last()
            .map(|slot| slot.start + slot.length)
            .unwrap_or(template.title_length)
    );

    Ok(LayoutPlan { title, images })
}

/// Places the wipe over the tail of the image slot at `index`. The window
/// must lie entirely within the slot's own interval.
fn wipe_slot(
    template: &Template,
    index: usize,
    slot_start: TimeSec,
    slot_length: TimeSec,
) -> CoreResult<LumaSlot> {
    let src = template.luma_for(index).ok_or_else(|| {
        CoreError::Layout(format!(
            "template '{}' defines no luma mattes but schedules wipes",
            template.id
        ))
    })?;

    if template.luma_length <= 0.0 {
        return Err(CoreError::Layout(format!(
            "template '{}' has a non-positive luma length",
            template.id
        )));
    }

    let start = slot_start + slot_length - template.luma_length;
    if start < slot_start {
        return Err(CoreError::Layout(format!(
            "wipe {} of template '{}' escapes its clip ({} < {})",
            index, template.id, start, slot_start
        )));
    }

    Ok(LumaSlot {
        src: src.to_string(),
        start,
        length: template.luma_length,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateRegistry;
    use crate::timeline::{Effect, Transition};

    fn assets(count: usize) -> Vec<SourceAsset> {
        (0..count)
            .map(|i| SourceAsset::new(format!("https://images.example.com/{}.jpg", i)))
            .collect()
    }

    fn template(id: &str) -> Template {
        TemplateRegistry::builtin().lookup(id).unwrap().clone()
    }

    #[test]
    fn test_title_slot_invariant_holds_for_every_template() {
        let registry = TemplateRegistry::builtin();
        for id in registry.ids() {
            let template = registry.lookup(id).unwrap();
            let plan = layout(template, &assets(template.clip_count)).unwrap();
            assert_eq!(plan.title.start, 0.0, "{}", id);
            assert_eq!(plan.title.length, template.title_length, "{}", id);
        }
    }

    #[test]
    fn test_classic_start_times_are_monotonic() {
        // title 3s, clip 4s, luma 2s: start_i = 3 + 2i
        let plan = layout(&template("classic"), &assets(6)).unwrap();
        let starts: Vec<f64> = plan.images.iter().map(|slot| slot.start).collect();
        assert_eq!(starts, vec![3.0, 5.0, 7.0, 9.0, 11.0, 13.0]);
    }

    #[test]
    fn test_overlay_keeps_full_length_everywhere() {
        let plan = layout(&template("classic"), &assets(6)).unwrap();
        for slot in &plan.images {
            assert_eq!(slot.length, 4.0);
        }
        // The final overlay clip still has no outgoing wipe.
        assert!(plan.images[5].wipe.is_none());
        assert!(plan.images[4].wipe.is_some());
    }

    #[test]
    fn test_trim_shortens_only_the_final_clip() {
        let plan = layout(&template("showcase"), &assets(8)).unwrap();
        for slot in &plan.images[..7] {
            assert_eq!(slot.length, 7.0);
        }
        assert_eq!(plan.images[7].length, 5.0);
        assert!(plan.images[7].wipe.is_none());
    }

    #[test]
    fn test_wipe_windows_lie_inside_their_clips() {
        let registry = TemplateRegistry::builtin();
        for id in registry.ids() {
            let template = registry.lookup(id).unwrap();
            let plan = layout(template, &assets(template.clip_count)).unwrap();
            for slot in &plan.images {
                if let Some(wipe) = &slot.wipe {
                    assert!(wipe.start >= slot.start, "{}", id);
                    assert!(wipe.start + wipe.length <= slot.start + slot.length, "{}", id);
                }
            }
        }
    }

    #[test]
    fn test_effects_cycle_past_one_full_round() {
        // minimal: two-effect cycle over five clips
        let plan = layout(&template("minimal"), &assets(5)).unwrap();
        let effects: Vec<Option<Effect>> = plan.images.iter().map(|slot| slot.effect).collect();
        assert_eq!(
            effects,
            vec![
                Some(Effect::ZoomIn),
                Some(Effect::ZoomOut),
                Some(Effect::ZoomIn),
                Some(Effect::ZoomOut),
                Some(Effect::ZoomIn),
            ]
        );
    }

    #[test]
    fn test_template_without_effects_emits_none() {
        let plan = layout(&template("showcase"), &assets(8)).unwrap();
        assert!(plan.images.iter().all(|slot| slot.effect.is_none()));
    }

    #[test]
    fn test_luma_mattes_cycle() {
        let template = template("classic");
        let plan = layout(&template, &assets(6)).unwrap();
        for (index, slot) in plan.images[..5].iter().enumerate() {
            let wipe = slot.wipe.as_ref().unwrap();
            assert_eq!(wipe.src, template.luma_cycle[index % template.luma_cycle.len()]);
            assert_eq!(wipe.length, 2.0);
        }
    }

    #[test]
    fn test_edge_transitions() {
        let entry_fade = layout(&template("showcase"), &assets(8)).unwrap();
        assert_eq!(entry_fade.images[0].transition_in, Some(Transition::Fade));
        assert_eq!(entry_fade.images[7].transition_out, Some(Transition::Fade));
        assert!(entry_fade.images[1..7]
            .iter()
            .all(|slot| slot.transition_in.is_none() && slot.transition_out.is_none()));

        let no_entry_fade = layout(&template("classic"), &assets(6)).unwrap();
        assert!(no_entry_fade.images[0].transition_in.is_none());
        assert_eq!(no_entry_fade.images[5].transition_out, Some(Transition::Fade));
    }

    #[test]
    fn test_wrong_asset_count_is_a_layout_error() {
        let err = layout(&template("classic"), &assets(4)).unwrap_err();
        assert!(matches!(err, CoreError::Layout(_)));
    }

    #[test]
    fn test_misconfigured_luma_length_is_a_layout_error() {
        let mut broken = template("showcase");
        // Trimmed final clip would end up with length 7 - 8 < 0.
        broken.luma_length = 8.0;
        let err = layout(&broken, &assets(8)).unwrap_err();
        assert!(matches!(err, CoreError::Layout(_)));
    }

    #[test]
    fn test_empty_luma_cycle_is_a_layout_error() {
        let mut broken = template("classic");
        broken.luma_cycle.clear();
        let err = layout(&broken, &assets(6)).unwrap_err();
        assert!(matches!(err, CoreError::Layout(_)));
    }

    #[test]
    fn test_single_clip_template() {
        let mut single = template("classic");
        single.clip_count = 1;
        single.min_clips = 1;
        let plan = layout(&single, &assets(1)).unwrap();

        assert_eq!(plan.images.len(), 1);
        assert_eq!(plan.images[0].start, 3.0);
        assert!(plan.images[0].wipe.is_none());
        assert_eq!(plan.images[0].transition_out, Some(Transition::Fade));
    }
}
