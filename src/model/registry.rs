//! Dropdown registry - the fixed set of dropdowns discovered at startup
//!
//! Per-dropdown runtime state lives here, keyed by a stable `DropdownId`,
//! rather than on page nodes. The registry is built once and never grows or
//! shrinks afterwards.

use crate::config::Markers;

use super::page::{ElementId, Page};

/// Stable identifier for a registered dropdown (its discovery index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DropdownId(pub usize);

/// Mutable state of one dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub is_open: bool,
    /// Elements dimmed because they overlapped this menu while open
    pub dimmed_siblings: Vec<ElementId>,
    /// Peer triggers hidden while this dropdown is open
    pub hidden_peer_triggers: Vec<ElementId>,
    /// Generation of the scheduled hover close, if any
    pub pending_close: Option<u64>,
    /// Open marker as last seen by the observer
    pub observed_open: bool,
}

impl DropdownState {
    /// True when no visual side effects are outstanding
    pub fn is_clean(&self) -> bool {
        self.dimmed_siblings.is_empty() && self.hidden_peer_triggers.is_empty()
    }
}

/// One discovered dropdown instance
#[derive(Debug, Clone)]
pub struct Dropdown {
    pub id: DropdownId,
    pub container: ElementId,
    pub trigger: ElementId,
    pub menu: Option<ElementId>,
    /// False when the menu is missing or empty; the trigger is then a plain link
    pub has_popup: bool,
    pub state: DropdownState,
}

impl Dropdown {
    /// Menu element, only for dropdowns that actually pop up
    pub fn popup_menu(&self) -> Option<ElementId> {
        self.menu.filter(|_| self.has_popup)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DropdownRegistry {
    dropdowns: Vec<Dropdown>,
    next_generation: u64,
}

impl DropdownRegistry {
    /// Enumerate dropdown containers in document order
    ///
    /// Containers without a trigger are inert and left out entirely.
    pub fn discover(page: &Page, markers: &Markers) -> Self {
        let mut dropdowns = Vec::new();
        for container in page.query_class(&markers.container) {
            let Some(trigger) = page.find_descendant(container, &markers.trigger) else {
                tracing::debug!(
                    container = %page.label(container),
                    "dropdown without trigger, skipping"
                );
                continue;
            };
            let menu = page.find_descendant(container, &markers.menu);
            let has_popup = menu.is_some_and(|m| page.child_count(m) > 0);
            dropdowns.push(Dropdown {
                id: DropdownId(dropdowns.len()),
                container,
                trigger,
                menu,
                has_popup,
                state: DropdownState::default(),
            });
        }
        tracing::debug!("Discovered {} dropdowns", dropdowns.len());
        Self {
            dropdowns,
            next_generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.dropdowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dropdowns.is_empty()
    }

    pub fn get(&self, id: DropdownId) -> Option<&Dropdown> {
        self.dropdowns.get(id.0)
    }

    pub fn get_mut(&mut self, id: DropdownId) -> Option<&mut Dropdown> {
        self.dropdowns.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dropdown> {
        self.dropdowns.iter()
    }

    pub fn ids(&self) -> Vec<DropdownId> {
        self.dropdowns.iter().map(|d| d.id).collect()
    }

    /// The currently open dropdown, if any
    pub fn open_dropdown(&self) -> Option<DropdownId> {
        self.dropdowns.iter().find(|d| d.state.is_open).map(|d| d.id)
    }

    pub fn open_count(&self) -> usize {
        self.dropdowns.iter().filter(|d| d.state.is_open).count()
    }

    /// Dropdown whose container is exactly `container`
    pub fn by_container(&self, container: ElementId) -> Option<DropdownId> {
        self.dropdowns
            .iter()
            .find(|d| d.container == container)
            .map(|d| d.id)
    }

    /// Popup dropdown whose trigger is `element`
    pub fn by_trigger(&self, element: ElementId) -> Option<DropdownId> {
        self.dropdowns
            .iter()
            .find(|d| d.has_popup && d.trigger == element)
            .map(|d| d.id)
    }

    /// Popup dropdown whose menu is `element`
    pub fn by_menu(&self, element: ElementId) -> Option<DropdownId> {
        self.dropdowns
            .iter()
            .find(|d| d.popup_menu() == Some(element))
            .map(|d| d.id)
    }

    /// Allocate a fresh hover timer generation
    pub fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}
