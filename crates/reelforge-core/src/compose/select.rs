//! Asset Selection Strategy
//!
//! Picks the ordered subset of candidate assets that fills a template,
//! either in provider order or by random sampling without replacement.

use rand::seq::index;
use rand::Rng;

use crate::error::{CoreError, CoreResult};
use crate::search::SourceAsset;
use crate::template::SelectionMode;

/// Selects exactly `count` assets from `candidates`. The selection order is
/// the final screen order. Randomized selection draws from the supplied
/// source only, so it stays reproducible under test.
pub fn select<R>(
    candidates: Vec<SourceAsset>,
    count: usize,
    mode: SelectionMode,
    rng: &mut R,
    query: &str,
) -> CoreResult<Vec<SourceAsset>>
where
    R: Rng + ?Sized,
{
    if candidates.len() < count {
        return Err(CoreError::InsufficientAssets {
            query: query.to_string(),
            required: count,
            available: candidates.len(),
        });
    }

    let selected = match mode {
        SelectionMode::Sequential => {
            let mut candidates = candidates;
            candidates.truncate(count);
            candidates
        }
        SelectionMode::RandomSample => {
            // Draw order, not provider order, decides the final sequence.
            index::sample(rng, candidates.len(), count)
                .iter()
                .map(|i| candidates[i].clone())
                .collect()
        }
    };

    Ok(selected)
}

// =============================================================================
// Tests
// =============================================================================
