//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

pub mod dismissal;
pub mod dropdown;
pub mod hover;
pub mod observer;
pub mod rating;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::OpenSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use dismissal::{event_scope, update_page, EventScope};
pub use dropdown::{close_all, set_open, toggle, update_dropdown};
pub use hover::update_hover;
pub use rating::update_rating;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation and checks the
/// dropdown invariants after every message.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Dropdown(m) => dropdown::update_dropdown(model, m),
        Msg::Hover(m) => hover::update_hover(model, m),
        Msg::Page(m) => dismissal::update_page(model, m),
        Msg::Rating(m) => rating::update_rating(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = OpenSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = OpenSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "dropdown", %diff, "state changed");
    }

    if let Err(violation) = model.check_invariants() {
        tracing::error!(msg = %msg_name, %violation, "dropdown invariant violated");
        debug_assert!(false, "after {}: {}", msg_name, violation);
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Dropdown::Toggle(DropdownId(0))`
/// - `Page::KeyDown { target: None, key: Escape }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Dropdown(m) => format!("Dropdown::{:?}", m),
        Msg::Hover(m) => format!("Hover::{:?}", m),
        Msg::Page(m) => format!("Page::{:?}", m),
        Msg::Rating(m) => format!("Rating::{:?}", m),
    }
}
