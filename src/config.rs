//! Controller configuration
//!
//! Stores marker names, the overlap candidate list and timing in
//! `~/.config/dropdown-control/config.yaml`. Every field has a default, so a
//! partial file (or none at all) is valid.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default grace period before a hover-opened menu closes
pub const DEFAULT_HOVER_CLOSE_DELAY_MS: u64 = 220;

/// Class and attribute markers that make up the page contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Dropdown container discovered at initialization
    pub container: String,
    /// Trigger control inside a container
    pub trigger: String,
    /// Menu content inside a container
    pub menu: String,
    /// "This dropdown is open"
    pub open: String,
    /// "De-emphasized because a dropdown is open"
    pub dimmed: String,
    /// "Trigger hidden because a peer dropdown is open"
    pub hidden_peer: String,
    /// Page-wide "some dropdown menu is open", set on `<body>`
    pub page_open: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            container: "info-dropdown".to_string(),
            trigger: "info-btn".to_string(),
            menu: "info-menu".to_string(),
            open: "open".to_string(),
            dimmed: "dim-on-dropdown".to_string(),
            hidden_peer: "info-hidden-when-open".to_string(),
            page_open: "dropdown-open".to_string(),
        }
    }
}

/// Markers for star rating groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingMarkers {
    pub group: String,
    pub star: String,
    pub star_on: String,
    /// `name` attribute of the value field
    pub field_name: String,
}

impl Default for RatingMarkers {
    fn default() -> Self {
        Self {
            group: "star-rating".to_string(),
            star: "star".to_string(),
            star_on: "star-on".to_string(),
            field_name: "rating".to_string(),
        }
    }
}

/// Full controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    pub markers: Markers,
    /// Regions considered for dimming; class names or tag names
    pub overlap_candidates: Vec<String>,
    pub hover_close_delay_ms: u64,
    pub rating: RatingMarkers,
    /// Sparkline stroke, `#RRGGBB` or `#RRGGBBAA`
    pub sparkline_stroke: String,
}

fn default_overlap_candidates() -> Vec<String> {
    [
        "section",
        "cards-row",
        "virus-cards",
        "hero-section",
        "graph-item",
        "timeline-graphs",
        "card",
        "btn",
        "info-dropdown",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            markers: Markers::default(),
            overlap_candidates: default_overlap_candidates(),
            hover_close_delay_ms: DEFAULT_HOVER_CLOSE_DELAY_MS,
            rating: RatingMarkers::default(),
            sparkline_stroke: "#0b63b5".to_string(),
        }
    }
}

impl DropdownConfig {
    /// Parse a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load a config file, failing on unreadable or malformed content
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Save config to the given path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn hover_close_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.hover_close_delay_ms)
    }
}
