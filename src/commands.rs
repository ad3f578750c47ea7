//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that the host should perform after an
//! update. The only deferred effect in this system is the hover close timer.

use crate::model::DropdownId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Presentation markers changed; the host should repaint
    Redraw,
    /// Start a hover close timer
    /// After delay_ms, sends Msg::Hover(CloseElapsed)
    ScheduleHoverClose {
        dropdown: DropdownId,
        generation: u64,
        delay_ms: u64,
    },
    /// Drop a previously scheduled hover close timer
    CancelHoverClose {
        dropdown: DropdownId,
        generation: u64,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, collapsing trivial batches
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::ScheduleHoverClose { .. } => false,
            Cmd::CancelHoverClose { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// `Some(Cmd::Redraw)` when something changed, `None` otherwise
    pub fn redraw_if(changed: bool) -> Option<Cmd> {
        changed.then_some(Cmd::Redraw)
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
