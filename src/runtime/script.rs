//! Timed input scripts for replaying interactions
//!
//! ```yaml
//! steps:
//!   - { at_ms: 0, pointer_enter: about }
//!   - { at_ms: 120, pointer_leave: about }
//!   - { at_ms: 400, click: hero }
//!   - { at_ms: 500, press: { key: escape } }
//! ```
//!
//! Elements are referenced by their author-assigned names.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use serde::Deserialize;

use crate::messages::{DropdownMsg, HoverMsg, Key, Msg, PageMsg};
use crate::model::{AppModel, DropdownId, ElementId};

use super::session::Session;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    Click(String),
    Wheel(String),
    Press {
        key: Key,
        #[serde(default)]
        target: Option<String>,
    },
    PointerEnter(String),
    PointerLeave(String),
    Toggle(String),
    /// Edit a class outside the controller, then report the markup change
    AddClass {
        element: String,
        class: String,
    },
    RemoveClass {
        element: String,
        class: String,
    },
    /// Remove an element from the document
    Detach(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptStep {
    #[serde(default)]
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: ScriptEvent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse script {}", path.display()))
    }

    /// Offset of the last step
    pub fn duration(&self) -> Duration {
        let last = self.steps.iter().map(|s| s.at_ms).max().unwrap_or(0);
        Duration::from_millis(last)
    }
}

impl Session {
    /// Replay `script` starting at `start`, then let timers run for `settle`
    pub fn replay(&mut self, script: &Script, start: Instant, settle: Duration) -> anyhow::Result<()> {
        for (index, step) in script.steps.iter().enumerate() {
            let now = start + Duration::from_millis(step.at_ms);
            self.apply_event(&step.event, now)
                .with_context(|| format!("Script step {} ({:?})", index + 1, step.event))?;
        }
        self.advance(start + script.duration() + settle);
        Ok(())
    }

    fn apply_event(&mut self, event: &ScriptEvent, now: Instant) -> anyhow::Result<()> {
        match event {
            ScriptEvent::Click(name) => {
                let target = element(&self.model, name)?;
                self.dispatch(Msg::Page(PageMsg::Click(target)), now);
            }
            ScriptEvent::Wheel(name) => {
                let target = element(&self.model, name)?;
                self.dispatch(Msg::Page(PageMsg::Wheel(target)), now);
            }
            ScriptEvent::Press { key, target } => {
                let target = target
                    .as_deref()
                    .map(|name| element(&self.model, name))
                    .transpose()?;
                self.dispatch(Msg::Page(PageMsg::KeyDown { target, key: *key }), now);
            }
            ScriptEvent::PointerEnter(name) => {
                let id = dropdown(&self.model, name)?;
                self.dispatch(Msg::Hover(HoverMsg::PointerEntered(id)), now);
            }
            ScriptEvent::PointerLeave(name) => {
                let id = dropdown(&self.model, name)?;
                self.dispatch(Msg::Hover(HoverMsg::PointerLeft(id)), now);
            }
            ScriptEvent::Toggle(name) => {
                let id = dropdown(&self.model, name)?;
                self.dispatch(Msg::Dropdown(DropdownMsg::Toggle(id)), now);
            }
            ScriptEvent::AddClass { element: name, class } => {
                let target = element(&self.model, name)?;
                self.advance(now);
                self.model.page.add_class(target, class);
                self.dispatch(Msg::Page(PageMsg::MarkupChanged), now);
            }
            ScriptEvent::RemoveClass { element: name, class } => {
                let target = element(&self.model, name)?;
                self.advance(now);
                self.model.page.remove_class(target, class);
                self.dispatch(Msg::Page(PageMsg::MarkupChanged), now);
            }
            ScriptEvent::Detach(name) => {
                let target = element(&self.model, name)?;
                self.advance(now);
                self.model.page.detach(target);
            }
        }
        Ok(())
    }
}

fn element(model: &AppModel, name: &str) -> anyhow::Result<ElementId> {
    model
        .page
        .find_by_name(name)
        .ok_or_else(|| anyhow!("No element named {:?}", name))
}

/// Resolve a name to the dropdown whose container holds that element
fn dropdown(model: &AppModel, name: &str) -> anyhow::Result<DropdownId> {
    let target = element(model, name)?;
    model
        .page
        .ancestors_inclusive(target)
        .find_map(|el| model.dropdowns.by_container(el))
        .ok_or_else(|| anyhow!("Element {:?} is not inside a registered dropdown", name))
}
