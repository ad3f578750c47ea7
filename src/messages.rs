//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::Deserialize;

use crate::model::{DropdownId, ElementId};

/// Keyboard keys the page listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
    #[serde(other)]
    Other,
}

/// Explicit open-state requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownMsg {
    /// Close everything; open the target unless it was already open
    Toggle(DropdownId),
    /// Open the target (closing any other)
    Open(DropdownId),
    /// Close the target if it is open
    Close(DropdownId),
    /// Close every dropdown
    CloseAll,
}

/// Pointer hover intent (capable devices only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverMsg {
    /// Pointer entered a dropdown container
    PointerEntered(DropdownId),
    /// Pointer left a dropdown container
    PointerLeft(DropdownId),
    /// A scheduled hover close fired
    CloseElapsed {
        dropdown: DropdownId,
        generation: u64,
    },
}

/// Raw page input, routed by bubbling from the target element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMsg {
    /// Primary click on an element
    Click(ElementId),
    /// Wheel/scroll input over an element
    Wheel(ElementId),
    /// Key press; `target` is the focused element, if any
    KeyDown { target: Option<ElementId>, key: Key },
    /// Markup was changed outside the controller (e.g. by another script)
    MarkupChanged,
}

/// Star rating input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingMsg {
    /// Set group `group` to `value` stars
    Select { group: usize, value: u32 },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Dropdown(DropdownMsg),
    Hover(HoverMsg),
    Page(PageMsg),
    Rating(RatingMsg),
}
