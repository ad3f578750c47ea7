//! Open-state controller
//!
//! Every open/close in the system funnels through [`set_open`] and
//! [`close_all`]. Opening always closes everything first, so at most one
//! dropdown is open once a handler returns, and the observer never sees two
//! open menus.

use crate::commands::Cmd;
use crate::messages::DropdownMsg;
use crate::model::{AppModel, DropdownId};

use super::observer;

/// Handle explicit open-state requests
pub fn update_dropdown(model: &mut AppModel, msg: DropdownMsg) -> Option<Cmd> {
    let changed = match msg {
        DropdownMsg::Toggle(id) => toggle(model, id),
        DropdownMsg::Open(id) => set_open(model, id, true),
        DropdownMsg::Close(id) => set_open(model, id, false),
        DropdownMsg::CloseAll => close_all(model),
    };
    Cmd::redraw_if(changed)
}

/// Close every dropdown; open `id` unless it was the open one
pub fn toggle(model: &mut AppModel, id: DropdownId) -> bool {
    let Some(was_open) = model.dropdowns.get(id).map(|d| d.state.is_open) else {
        return false;
    };
    if was_open {
        return close_all(model);
    }
    let closed = close_all(model);
    let opened = set_open(model, id, true);
    closed || opened
}

/// Single state-transition entry point
///
/// Opening an already-open dropdown is a no-op, so hover re-entry never
/// flickers. Dropdowns without a popup menu cannot be opened.
pub fn set_open(model: &mut AppModel, id: DropdownId, open: bool) -> bool {
    let Some(dropdown) = model.dropdowns.get(id) else {
        return false;
    };

    if open {
        if dropdown.state.is_open || !dropdown.has_popup {
            return false;
        }
        close_all(model);
        open_one(model, id);
        observer::observe_all(model);
        tracing::debug!(dropdown = id.0, "opened dropdown");
        true
    } else {
        let marker_set = model
            .page
            .has_class(dropdown.container, &model.config.markers.open);
        if !dropdown.state.is_open && !marker_set {
            return false;
        }
        close_one(model, id);
        observer::observe_all(model);
        tracing::debug!(dropdown = id.0, "closed dropdown");
        true
    }
}

/// Close every dropdown and clear all visual side effects
///
/// Idempotent: with nothing open, nothing on the page changes.
pub fn close_all(model: &mut AppModel) -> bool {
    let mut changed = false;
    for id in model.dropdowns.ids() {
        changed |= close_one(model, id);
    }
    // Dimming is undone by the observer once it sees the open markers gone
    changed |= observer::observe_all(model);

    let body = model.page.body();
    changed |= model
        .page
        .remove_class(body, &model.config.markers.page_open);

    if changed {
        tracing::debug!("closed all dropdowns");
    }
    changed
}

fn open_one(model: &mut AppModel, id: DropdownId) {
    let AppModel {
        page,
        dropdowns,
        config,
        ..
    } = model;
    let markers = &config.markers;

    let peers: Vec<_> = dropdowns
        .iter()
        .filter(|d| d.id != id)
        .map(|d| d.trigger)
        .collect();
    let Some(dropdown) = dropdowns.get_mut(id) else {
        return;
    };

    page.add_class(dropdown.container, &markers.open);
    page.set_attribute(dropdown.trigger, "aria-expanded", "true");
    for trigger in &peers {
        page.add_class(*trigger, &markers.hidden_peer);
    }

    dropdown.state.is_open = true;
    dropdown.state.hidden_peer_triggers = peers;
    // Any hover close scheduled before this open is stale now
    dropdown.state.pending_close = None;
}

fn close_one(model: &mut AppModel, id: DropdownId) -> bool {
    let AppModel {
        page,
        dropdowns,
        config,
        ..
    } = model;
    let markers = &config.markers;
    let Some(dropdown) = dropdowns.get_mut(id) else {
        return false;
    };

    let mut changed = page.remove_class(dropdown.container, &markers.open);
    if dropdown.has_popup {
        changed |= page.set_attribute(dropdown.trigger, "aria-expanded", "false");
    }
    for trigger in dropdown.state.hidden_peer_triggers.drain(..) {
        changed |= page.remove_class(trigger, &markers.hidden_peer);
    }
    changed |= dropdown.state.is_open;
    dropdown.state.is_open = false;
    if let Some(generation) = dropdown.state.pending_close.take() {
        tracing::trace!(dropdown = id.0, generation, "hover close superseded");
    }
    changed
}
