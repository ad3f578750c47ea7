//! Open-marker observer
//!
//! Watches each dropdown's open marker and keeps the dimming side effect in
//! step with it. Runs after every controller transition and whenever the host
//! reports that markup changed behind the controller's back, so cleanup is the
//! same no matter which path closed a menu.

use crate::model::{AppModel, DropdownId};
use crate::view::overlap::find_overlapping;

use super::dropdown;

/// Reconcile every dropdown's dimming with its open marker
pub fn observe_all(model: &mut AppModel) -> bool {
    let mut changed = false;
    for id in model.dropdowns.ids() {
        changed |= observe(model, id);
    }
    changed
}

/// React to a change of one dropdown's open marker
///
/// Closed→open dims every overlapping region; open→closed restores them.
/// Calling it again without a marker change does nothing.
pub fn observe(model: &mut AppModel, id: DropdownId) -> bool {
    let Some(dropdown) = model.dropdowns.get(id) else {
        return false;
    };
    let open = model
        .page
        .has_class(dropdown.container, &model.config.markers.open);

    match (dropdown.state.observed_open, open) {
        (false, true) => {
            set_observed(model, id, true);
            apply_dimming(model, id);
            true
        }
        (true, false) => {
            set_observed(model, id, false);
            clear_dimming(model, id)
        }
        _ => false,
    }
}

/// Bring controller state in line with markers edited outside the controller
///
/// Externally opened dropdowns go through the regular open path, so
/// exclusivity still holds; externally closed ones are closed the same way.
pub fn reconcile(model: &mut AppModel) -> bool {
    let mut changed = false;
    for id in model.dropdowns.ids() {
        let Some(dropdown) = model.dropdowns.get(id) else {
            continue;
        };
        let container = dropdown.container;
        let marker = model
            .page
            .has_class(container, &model.config.markers.open);
        if marker && !dropdown.has_popup {
            tracing::debug!(dropdown = id.0, "dropping open marker on plain link");
            changed |= model
                .page
                .remove_class(container, &model.config.markers.open);
            continue;
        }
        if marker != dropdown.state.is_open {
            tracing::debug!(
                dropdown = id.0,
                marker,
                "open marker changed outside the controller"
            );
            changed |= dropdown::set_open(model, id, marker);
        }
    }
    changed | observe_all(model)
}

fn set_observed(model: &mut AppModel, id: DropdownId, open: bool) {
    if let Some(dropdown) = model.dropdowns.get_mut(id) {
        dropdown.state.observed_open = open;
    }
}

fn apply_dimming(model: &mut AppModel, id: DropdownId) {
    let AppModel {
        page,
        dropdowns,
        config,
        ..
    } = model;
    let Some(dropdown) = dropdowns.get_mut(id) else {
        return;
    };
    let Some(menu) = dropdown.popup_menu() else {
        return;
    };
    let Some(bounds) = page.bounding_rect(menu) else {
        tracing::debug!(dropdown = id.0, "menu has no layout, skipping dimming");
        return;
    };

    let candidates = page.query_any(&config.overlap_candidates);
    let matches = find_overlapping(page, bounds, &candidates, menu);
    for element in &matches {
        page.add_class(*element, &config.markers.dimmed);
    }
    if !matches.is_empty() {
        let body = page.body();
        page.add_class(body, &config.markers.page_open);
    }

    tracing::debug!(
        dropdown = id.0,
        dimmed = matches.len(),
        candidates = candidates.len(),
        "applied dimming"
    );
    dropdown.state.dimmed_siblings = matches;
}

fn clear_dimming(model: &mut AppModel, id: DropdownId) -> bool {
    let AppModel {
        page,
        dropdowns,
        config,
        ..
    } = model;
    let Some(dropdown) = dropdowns.get_mut(id) else {
        return false;
    };
    let restored = std::mem::take(&mut dropdown.state.dimmed_siblings);
    let mut changed = false;
    for element in &restored {
        changed |= page.remove_class(*element, &config.markers.dimmed);
    }

    let still_needed = dropdowns.iter().any(|d| !d.state.dimmed_siblings.is_empty());
    if !still_needed {
        let body = page.body();
        changed |= page.remove_class(body, &config.markers.page_open);
    }
    changed
}
