//! Dropdown control - Elm-style controller for header dropdown menus
//!
//! This crate provides the core types and logic for a set of mutually
//! exclusive dropdown menus: open-state control, overlap dimming, hover
//! intent and global dismissal, plus the star rating and sparkline
//! collaborators that share its initialization entrypoint.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod debug_dump;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DropdownConfig;
pub use messages::Msg;
pub use model::AppModel;
