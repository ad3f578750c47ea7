//! Model module - application state for the Elm-style architecture
//!
//! The model holds the page, the dropdown registry and the collaborator
//! state. All of it is mutated only through `update`.

pub mod fixture;
pub mod page;
pub mod rating;
pub mod registry;

pub use fixture::PageFixture;
pub use page::{Element, ElementId, Page};
pub use rating::RatingGroup;
pub use registry::{Dropdown, DropdownId, DropdownRegistry, DropdownState};

use crate::config::DropdownConfig;
use crate::view::sparkline::{draw_sample_series, DEFAULT_STROKE};
use crate::view::surface::Color;

/// Pointer capabilities of the host device, fixed at initialization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerCapabilities {
    /// The primary pointer can hover
    pub hover: bool,
    /// The primary pointer is precise (mouse, trackpad)
    pub fine: bool,
}

impl PointerCapabilities {
    /// A mouse-driven desktop
    pub fn desktop() -> Self {
        Self {
            hover: true,
            fine: true,
        }
    }

    /// A touch-only device
    pub fn touch() -> Self {
        Self::default()
    }

    /// Hover intent only applies when the pointer can hover precisely
    pub fn can_hover(&self) -> bool {
        self.hover && self.fine
    }
}

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    pub page: Page,
    pub dropdowns: DropdownRegistry,
    pub ratings: Vec<RatingGroup>,
    pub config: DropdownConfig,
    pub pointer: PointerCapabilities,
}

impl AppModel {
    /// Shared initialization entrypoint
    ///
    /// Discovers dropdowns and marks popup triggers, initializes rating
    /// groups and draws the sample sparklines. The three collaborators own
    /// disjoint state; a missing piece of markup only disables its own part.
    pub fn init(page: Page, config: DropdownConfig, pointer: PointerCapabilities) -> Self {
        let mut page = page;
        let dropdowns = DropdownRegistry::discover(&page, &config.markers);
        for dropdown in dropdowns.iter().filter(|d| d.has_popup) {
            page.set_attribute(dropdown.trigger, "aria-haspopup", "true");
            page.set_attribute(dropdown.trigger, "aria-expanded", "false");
        }

        let ratings = RatingGroup::discover_all(&mut page, &config.rating);

        let stroke = Color::from_hex(&config.sparkline_stroke).unwrap_or_else(|e| {
            tracing::warn!("Invalid sparkline stroke {:?}: {}", config.sparkline_stroke, e);
            DEFAULT_STROKE
        });
        let drawn = draw_sample_series(&mut page, stroke);

        tracing::info!(
            dropdowns = dropdowns.len(),
            ratings = ratings.len(),
            sparklines = drawn,
            hover = pointer.can_hover(),
            "Initialized page"
        );

        Self {
            page,
            dropdowns,
            ratings,
            config,
            pointer,
        }
    }

    pub fn dropdown(&self, id: DropdownId) -> Option<&Dropdown> {
        self.dropdowns.get(id)
    }

    /// Whether the page-wide "dropdown open" marker is set
    pub fn page_dimmed(&self) -> bool {
        self.page
            .has_class(self.page.body(), &self.config.markers.page_open)
    }

    /// Check the exclusivity and cleanup invariants
    ///
    /// At most one dropdown is open, and a closed dropdown holds no dimmed
    /// elements and no hidden peers.
    pub fn check_invariants(&self) -> Result<(), String> {
        let open = self.dropdowns.open_count();
        if open > 1 {
            return Err(format!("{} dropdowns open at once", open));
        }
        for dropdown in self.dropdowns.iter() {
            if !dropdown.state.is_open && !dropdown.state.is_clean() {
                return Err(format!(
                    "closed dropdown {} still has {} dimmed and {} hidden elements",
                    dropdown.id.0,
                    dropdown.state.dimmed_siblings.len(),
                    dropdown.state.hidden_peer_triggers.len()
                ));
            }
        }
        Ok(())
    }
}
