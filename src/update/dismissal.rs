//! Page-level input routing and global dismissal
//!
//! Raw clicks, wheel input and key presses are routed by bubbling from the
//! target element towards `<body>`, the way the host document would deliver
//! them:
//! - a popup trigger consumes the click and toggles its dropdown
//! - a popup menu swallows clicks and wheel input so it never closes itself
//! - anything that bubbles all the way up closes every dropdown
//!
//! Escape closes every dropdown regardless of focus.

use crate::commands::Cmd;
use crate::messages::{Key, PageMsg};
use crate::model::{AppModel, DropdownId, ElementId};

use super::{dropdown, observer, rating};

/// Where an event lands within the dropdown subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventScope {
    /// On (or inside) the trigger of a popup dropdown
    Trigger(DropdownId),
    /// Inside a popup menu; propagation stops here
    Menu(DropdownId),
    /// Outside the subsystem; reaches the page-level listeners
    Outside,
}

/// Find the innermost subsystem listener on the bubbling path of `target`
pub fn event_scope(model: &AppModel, target: ElementId) -> EventScope {
    for element in model.page.ancestors_inclusive(target) {
        if let Some(id) = model.dropdowns.by_trigger(element) {
            return EventScope::Trigger(id);
        }
        if let Some(id) = model.dropdowns.by_menu(element) {
            return EventScope::Menu(id);
        }
    }
    EventScope::Outside
}

/// Handle raw page input
pub fn update_page(model: &mut AppModel, msg: PageMsg) -> Option<Cmd> {
    match msg {
        PageMsg::Click(target) => {
            // Star handlers sit below any dropdown listener and never stop propagation
            let rated = rating::select_star_at(model, target);

            let changed = match event_scope(model, target) {
                EventScope::Trigger(id) => dropdown::toggle(model, id),
                EventScope::Menu(id) => {
                    tracing::trace!(dropdown = id.0, "click inside menu suppressed");
                    false
                }
                EventScope::Outside => dropdown::close_all(model),
            };
            Cmd::redraw_if(rated || changed)
        }

        PageMsg::Wheel(target) => {
            if let EventScope::Menu(id) = event_scope(model, target) {
                tracing::trace!(dropdown = id.0, "wheel inside menu suppressed");
            }
            None
        }

        PageMsg::KeyDown { target, key } => match key {
            Key::Escape => Cmd::redraw_if(dropdown::close_all(model)),
            Key::Enter | Key::Space => {
                let rated = target.is_some_and(|t| rating::select_star_at(model, t));
                Cmd::redraw_if(rated)
            }
            _ => None,
        },

        PageMsg::MarkupChanged => Cmd::redraw_if(observer::reconcile(model)),
    }
}
