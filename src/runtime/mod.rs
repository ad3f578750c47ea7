//! Runtime module - host-side integration
//!
//! This module contains the pieces a host needs to drive the controller:
//! - `session` - update loop and hover timer queue
//! - `script` - timed input scripts for deterministic replays

pub mod script;
pub mod session;

pub use script::{Script, ScriptEvent, ScriptStep};
pub use session::{PendingTimer, Session};
