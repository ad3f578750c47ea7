//! Overlap detection between an open menu and surrounding page regions
//!
//! A pure query over the page: nothing is mutated, and calling it again with
//! the same inputs yields the same answer.

use crate::model::page::{ElementId, Page};

use super::geometry::Rect;

/// Return the candidates whose bounds intersect `menu_bounds`
///
/// Candidates that are the `exclude` element itself, one of its ancestors or
/// one of its descendants are skipped so a menu never matches its own
/// container. Candidates without a layout box never match.
pub fn find_overlapping(
    page: &Page,
    menu_bounds: Rect,
    candidates: &[ElementId],
    exclude: ElementId,
) -> Vec<ElementId> {
    candidates
        .iter()
        .copied()
        .filter(|&candidate| {
            !page.contains(candidate, exclude) && !page.contains(exclude, candidate)
        })
        .filter(|&candidate| {
            let hit = page
                .bounding_rect(candidate)
                .is_some_and(|r| menu_bounds.intersects(&r));
            tracing::trace!(
                candidate = %page.label(candidate),
                hit,
                "overlap scan"
            );
            hit
        })
        .collect()
}

/// Geometry-only form of [`find_overlapping`] for callers that already hold
/// candidate bounds
pub fn overlapping_bounds<T: Copy>(menu_bounds: Rect, candidates: &[(T, Rect)]) -> Vec<T> {
    candidates
        .iter()
        .filter(|(_, r)| menu_bounds.intersects(r))
        .map(|(key, _)| *key)
        .collect()
}
