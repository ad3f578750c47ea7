//! Host session - runs updates and executes their commands
//!
//! The session is the piece a real host (browser shim, test, replay CLI)
//! drives. It owns the model and a queue of pending hover timers. Time is
//! always passed in, so replaying the same inputs at the same instants yields
//! the same state.

use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::messages::{HoverMsg, Msg};
use crate::model::{AppModel, DropdownId};
use crate::update::update;

/// A hover close waiting for its deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer {
    pub deadline: Instant,
    pub dropdown: DropdownId,
    pub generation: u64,
}

pub struct Session {
    pub model: AppModel,
    timers: Vec<PendingTimer>,
    redraws: usize,
}

impl Session {
    pub fn new(model: AppModel) -> Self {
        Self {
            model,
            timers: Vec::new(),
            redraws: 0,
        }
    }

    /// Fire due timers, then deliver `msg` at `now`
    pub fn dispatch(&mut self, msg: Msg, now: Instant) {
        self.advance(now);
        let cmd = update(&mut self.model, msg);
        self.process_cmd(cmd.into(), now);
    }

    /// Fire every timer whose deadline is at or before `now`, in deadline order
    pub fn advance(&mut self, now: Instant) {
        while let Some(index) = self.next_due(now) {
            let timer = self.timers.remove(index);
            tracing::trace!(
                dropdown = timer.dropdown.0,
                generation = timer.generation,
                "hover timer fired"
            );
            let cmd = update(
                &mut self.model,
                Msg::Hover(HoverMsg::CloseElapsed {
                    dropdown: timer.dropdown,
                    generation: timer.generation,
                }),
            );
            self.process_cmd(cmd.into(), timer.deadline);
        }
    }

    pub fn pending_timers(&self) -> &[PendingTimer] {
        &self.timers
    }

    /// Number of commands so far that asked for a repaint
    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    fn next_due(&self, now: Instant) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| t.deadline)
            .map(|(i, _)| i)
    }

    fn process_cmd(&mut self, cmd: Cmd, now: Instant) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.redraws += 1,
            Cmd::ScheduleHoverClose {
                dropdown,
                generation,
                delay_ms,
            } => {
                self.timers.push(PendingTimer {
                    deadline: now + Duration::from_millis(delay_ms),
                    dropdown,
                    generation,
                });
            }
            Cmd::CancelHoverClose {
                dropdown,
                generation,
            } => {
                self.timers
                    .retain(|t| !(t.dropdown == dropdown && t.generation == generation));
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd, now);
                }
            }
        }
    }
}
