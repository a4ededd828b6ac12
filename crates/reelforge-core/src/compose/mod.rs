//! Timeline Composition
//!
//! The pure pipeline that turns a template plus selected assets into a
//! complete render-request payload: layout → assemble → finalize. Asset
//! selection sits alongside as its own step so the service can thread an
//! injected random source through it.
//!
//! # Modules
//!
//! - `select`: asset selection strategy (sequential / random sample)
//! - `layout`: clip layout engine, the core scheduler
//! - `assemble`: track assembler
//! - `finalize`: timeline finalizer

pub mod assemble;
pub mod finalize;
pub mod layout;
pub mod select;

// Re-export main entry points
pub use assemble::assemble;
pub use finalize::finalize;
pub use layout::{layout, ImageSlot, LayoutPlan, LumaSlot, TitleSlot};
pub use select::select;

use crate::error::CoreResult;
use crate::search::SourceAsset;
use crate::template::Template;
use crate::timeline::Edit;

/// Composes the full render-request payload from a template, the request's
/// title text, the selected assets (in screen order) and a soundtrack key.
/// Pure synchronous computation with no suspension points.
pub fn compose(
    template: &Template,
    title: &str,
    assets: &[SourceAsset],
    soundtrack: &str,
) -> CoreResult<Edit> {
    let plan = layout::layout(template, assets)?;
    let tracks = assemble::assemble(template, title, &plan);
    finalize::finalize(template, tracks, soundtrack)
}

// =============================================================================
// Tests
// =============================================================================
