//! Track Assembler
//!
//! Materializes the computed schedule into ordered tracks. Track 0 holds
//! the title card; each selected asset gets its own track containing the
//! image clip and, when scheduled, its trailing luma wipe. Track order
//! equals selection order.

use crate::template::Template;
use crate::timeline::{AssetSource, Clip, Track, TransitionPair};

use super::layout::LayoutPlan;

/// Builds the ordered track list for a computed plan
pub fn assemble(template: &Template, title_text: &str, plan: &LayoutPlan) -> Vec<Track> {
    let text = if template.title.uppercase {
        title_text.to_uppercase()
    } else {
        title_text.to_string()
    };

    let title_clip = Clip {
        asset: AssetSource::Title {
            text,
            style: template.title.style.clone(),
            size: template.title.size.clone(),
        },
        start: plan.title.start,
        length: plan.title.length,
        effect: plan.title.effect,
        transition: Some(TransitionPair::new(
            Some(plan.title.transition_in),
            Some(plan.title.transition_out),
        )),
    };

    let mut tracks = Vec::with_capacity(plan.images.len() + 1);
    tracks.push(Track::new(vec![title_clip]));

    for slot in &plan.images {
        let transition = TransitionPair::new(slot.transition_in, slot.transition_out);
        let image_clip = Clip {
            asset: AssetSource::Image {
                src: slot.src.clone(),
            },
            start: slot.start,
            length: slot.length,
            effect: slot.effect,
            transition: (!transition.is_empty()).then_some(transition),
        };

        let mut clips = vec![image_clip];
        if let Some(wipe) = &slot.wipe {
            clips.push(Clip {
                asset: AssetSource::Luma {
                    src: wipe.src.clone(),
                },
                start: wipe.start,
                length: wipe.length,
                effect: None,
                transition: None,
            });
        }
        tracks.push(Track::new(clips));
    }

    tracks
}

// =============================================================================
// Tests
// =============================================================================
