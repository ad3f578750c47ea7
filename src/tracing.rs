//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! open-state transitions, hover timers and overlap scans.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=dropdown=debug,message=debug` - scoped filtering
//! - `RUST_LOG=dropdown_control::view::overlap=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dropdown-control/logs/dropdown-control.log`
//! with daily rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`) and goes to stderr so
/// that JSON dumps on stdout stay machine-readable.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dropdown-control.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of open/dimmed state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSnapshot {
    pub open: Option<usize>,
    pub dimmed: usize,
    pub hidden: usize,
    pub pending_timers: usize,
}

impl OpenSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let states = || model.dropdowns.iter().map(|d| &d.state);
        Self {
            open: model.dropdowns.open_dropdown().map(|id| id.0),
            dimmed: states().map(|s| s.dimmed_siblings.len()).sum(),
            hidden: states().map(|s| s.hidden_peer_triggers.len()).sum(),
            pending_timers: states().filter(|s| s.pending_close.is_some()).count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &OpenSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.open != other.open {
            changes.push(format!("open: {:?} → {:?}", self.open, other.open));
        }
        if self.dimmed != other.dimmed {
            changes.push(format!("dimmed: {} → {}", self.dimmed, other.dimmed));
        }
        if self.hidden != other.hidden {
            changes.push(format!("hidden peers: {} → {}", self.hidden, other.hidden));
        }
        if self.pending_timers != other.pending_timers {
            changes.push(format!(
                "pending hover closes: {} → {}",
                self.pending_timers, other.pending_timers
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
