//! Centralized configuration paths for dropdown-control
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/dropdown-control/`
//! - Windows: `%APPDATA%\dropdown-control\`
//!
//! This module is the single source of truth for config paths.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "dropdown-control";

/// Base config directory for dropdown-control
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/dropdown-control`
///   - Else: `~/.config/dropdown-control`
///
/// Windows:
///   - `%APPDATA%\dropdown-control`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/dropdown-control/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/dropdown-control/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Ensure the logs directory exists, creating it if necessary
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let dir = logs_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "No config directory available")
    })?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
