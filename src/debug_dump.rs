//! State dump for diagnostics
//!
//! Serializes a snapshot of the controller state to JSON. Printed by the
//! replay CLI after a script has run.

use serde::Serialize;

use crate::model::AppModel;
use crate::runtime::Session;

#[derive(Debug, Serialize)]
pub struct StateDump {
    pub hover_enabled: bool,
    pub page_dimmed: bool,
    pub open: Option<String>,
    pub dropdowns: Vec<DropdownDump>,
    pub ratings: Vec<RatingDump>,
    pub pending_timers: usize,
    pub redraws: usize,
}

#[derive(Debug, Serialize)]
pub struct DropdownDump {
    pub id: usize,
    pub container: String,
    pub has_popup: bool,
    pub is_open: bool,
    pub aria_expanded: Option<String>,
    pub dimmed: Vec<String>,
    pub hidden_peers: Vec<String>,
    pub pending_close: bool,
}

#[derive(Debug, Serialize)]
pub struct RatingDump {
    pub container: String,
    pub value: u32,
    pub stars_on: usize,
}

impl StateDump {
    pub fn from_model(model: &AppModel) -> Self {
        let page = &model.page;
        let labels = |ids: &[crate::model::ElementId]| -> Vec<String> {
            ids.iter().map(|id| page.label(*id)).collect()
        };

        let dropdowns = model
            .dropdowns
            .iter()
            .map(|d| DropdownDump {
                id: d.id.0,
                container: page.label(d.container),
                has_popup: d.has_popup,
                is_open: d.state.is_open,
                aria_expanded: page.attribute(d.trigger, "aria-expanded").map(str::to_string),
                dimmed: labels(&d.state.dimmed_siblings),
                hidden_peers: labels(&d.state.hidden_peer_triggers),
                pending_close: d.state.pending_close.is_some(),
            })
            .collect();

        let ratings = model
            .ratings
            .iter()
            .map(|r| RatingDump {
                container: page.label(r.container),
                value: r.value,
                stars_on: r
                    .stars
                    .iter()
                    .filter(|s| page.has_class(**s, &model.config.rating.star_on))
                    .count(),
            })
            .collect();

        Self {
            hover_enabled: model.pointer.can_hover(),
            page_dimmed: model.page_dimmed(),
            open: model
                .dropdowns
                .open_dropdown()
                .and_then(|id| model.dropdowns.get(id))
                .map(|d| page.label(d.container)),
            dropdowns,
            ratings,
            pending_timers: 0,
            redraws: 0,
        }
    }

    pub fn from_session(session: &Session) -> Self {
        Self {
            pending_timers: session.pending_timers().len(),
            redraws: session.redraw_count(),
            ..Self::from_model(&session.model)
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
