//! Hover intent scheduling
//!
//! On hover-capable, precise-pointer devices a dropdown opens as soon as the
//! pointer enters it and closes a short grace period after the pointer
//! leaves. Re-entering during the grace period cancels the close, so a
//! pointer crossing the gap between trigger and menu never causes a flicker.
//!
//! The timer itself is owned by the host: leaving returns a
//! `Cmd::ScheduleHoverClose` tagged with a generation, and only an expiry
//! carrying the latest generation closes anything.

use crate::commands::Cmd;
use crate::messages::HoverMsg;
use crate::model::{AppModel, DropdownId};

use super::dropdown::set_open;

/// Handle hover intent messages
pub fn update_hover(model: &mut AppModel, msg: HoverMsg) -> Option<Cmd> {
    if !model.pointer.can_hover() {
        return None;
    }

    match msg {
        HoverMsg::PointerEntered(id) => pointer_entered(model, id),
        HoverMsg::PointerLeft(id) => pointer_left(model, id),
        HoverMsg::CloseElapsed {
            dropdown,
            generation,
        } => close_elapsed(model, dropdown, generation),
    }
}

fn pointer_entered(model: &mut AppModel, id: DropdownId) -> Option<Cmd> {
    let dropdown = model.dropdowns.get_mut(id)?;
    if !dropdown.has_popup {
        return None;
    }

    let mut cmds = Vec::new();
    if let Some(generation) = dropdown.state.pending_close.take() {
        tracing::trace!(dropdown = id.0, generation, "hover close cancelled");
        cmds.push(Cmd::CancelHoverClose {
            dropdown: id,
            generation,
        });
    }

    if set_open(model, id, true) {
        cmds.push(Cmd::Redraw);
    }
    Some(Cmd::batch(cmds))
}

fn pointer_left(model: &mut AppModel, id: DropdownId) -> Option<Cmd> {
    let delay_ms = model.config.hover_close_delay_ms;
    let generation = model.dropdowns.next_generation();
    let dropdown = model.dropdowns.get_mut(id)?;
    if !dropdown.has_popup {
        return None;
    }

    let mut cmds = Vec::new();
    if let Some(previous) = dropdown.state.pending_close.replace(generation) {
        cmds.push(Cmd::CancelHoverClose {
            dropdown: id,
            generation: previous,
        });
    }
    tracing::trace!(dropdown = id.0, generation, delay_ms, "hover close scheduled");
    cmds.push(Cmd::ScheduleHoverClose {
        dropdown: id,
        generation,
        delay_ms,
    });
    Some(Cmd::batch(cmds))
}

fn close_elapsed(model: &mut AppModel, id: DropdownId, generation: u64) -> Option<Cmd> {
    let dropdown = model.dropdowns.get_mut(id)?;
    if dropdown.state.pending_close != Some(generation) {
        tracing::trace!(dropdown = id.0, generation, "ignoring stale hover close");
        return None;
    }
    dropdown.state.pending_close = None;
    Cmd::redraw_if(set_open(model, id, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DropdownConfig;
    use crate::model::{Page, PointerCapabilities};

    fn model(pointer: PointerCapabilities) -> AppModel {
        let mut page = Page::new();
        let dd = page.append(page.body(), "div");
        page.add_class(dd, "info-dropdown");
        let btn = page.append(dd, "button");
        page.add_class(btn, "info-btn");
        let menu = page.append(dd, "div");
        page.add_class(menu, "info-menu");
        page.append(menu, "a");
        AppModel::init(page, DropdownConfig::default(), pointer)
    }

    #[test]
    fn test_touch_devices_ignore_hover() {
        let mut m = model(PointerCapabilities::touch());
        let cmd = update_hover(&mut m, HoverMsg::PointerEntered(DropdownId(0)));
        assert!(cmd.is_none());
        assert!(!m.dropdowns.get(DropdownId(0)).unwrap().state.is_open);
    }

    #[test]
    fn test_leave_schedules_configured_delay() {
        let mut m = model(PointerCapabilities::desktop());
        update_hover(&mut m, HoverMsg::PointerEntered(DropdownId(0)));
        let cmd = update_hover(&mut m, HoverMsg::PointerLeft(DropdownId(0)));
        match cmd {
            Some(Cmd::ScheduleHoverClose { delay_ms, .. }) => assert_eq!(delay_ms, 220),
            other => panic!("expected ScheduleHoverClose, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut m = model(PointerCapabilities::desktop());
        update_hover(&mut m, HoverMsg::PointerEntered(DropdownId(0)));
        update_hover(&mut m, HoverMsg::PointerLeft(DropdownId(0)));
        let cmd = update_hover(
            &mut m,
            HoverMsg::CloseElapsed {
                dropdown: DropdownId(0),
                generation: 999,
            },
        );
        assert!(cmd.is_none());
        assert!(m.dropdowns.get(DropdownId(0)).unwrap().state.is_open);
    }
}
