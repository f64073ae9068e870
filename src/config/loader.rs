//! Configuration file loading and overlay resolution.

use crate::config::OverviewConfig;
use crate::model::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during config loading and resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An option value failed validation during resolution.
    #[error("Invalid value for option '{option}': {reason}")]
    InvalidOption {
        /// The option name as it appears in the file.
        option: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Partial configuration overlay.
///
/// All fields are optional - anything unset falls back to the hard-coded
/// default. This is both the on-disk TOML structure
/// (`~/.config/minimap/config.toml`) and the partial-options argument
/// callers build programmatically.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Difference between host zoom and inset zoom.
    #[serde(default)]
    pub zoom_difference: Option<i32>,

    /// Inset box border color, hex without `#`.
    #[serde(default)]
    pub border_color: Option<String>,

    /// Inset frame background color, hex without `#`.
    #[serde(default)]
    pub background_color: Option<String>,

    /// Whether to draw the bounds rectangle.
    #[serde(default)]
    pub rectangle: Option<bool>,

    /// Rectangle stroke width in pixels.
    #[serde(default)]
    pub rectangle_border_width: Option<u32>,

    /// Rectangle fill/stroke color, hex without `#`.
    #[serde(default)]
    pub rectangle_color: Option<String>,

    /// Rectangle fill opacity, 0.0 to 1.0.
    #[serde(default)]
    pub rectangle_opacity: Option<f64>,

    /// Toggle icon shown while the inset is collapsed.
    #[serde(default)]
    pub up_icon: Option<String>,

    /// Toggle icon shown while the inset is expanded.
    #[serde(default)]
    pub down_icon: Option<String>,

    /// Toggle icon width in pixels.
    #[serde(default)]
    pub icon_width: Option<u32>,

    /// Toggle icon height in pixels.
    #[serde(default)]
    pub icon_height: Option<u32>,

    /// Inset box width in pixels.
    #[serde(default)]
    pub box_width: Option<u32>,

    /// Inset box height in pixels.
    #[serde(default)]
    pub box_height: Option<u32>,
}

/// Resolve the default config file path.
///
/// Returns `~/.config/minimap/config.toml` on Unix-like systems, or the
/// platform equivalent. Falls back to the current directory if no config
/// directory can be determined.
pub fn default_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("minimap").join("config.toml")
    } else {
        PathBuf::from("config.toml")
    }
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults). Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    let parsed = toml::from_str(&contents).map_err(|err| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    Ok(Some(parsed))
}

/// Merge a partial overlay over the hard-coded defaults.
///
/// Color strings and the rectangle opacity are validated here; absent
/// options fall back silently to their defaults.
pub fn resolve(overlay: Option<ConfigFile>) -> Result<OverviewConfig, ConfigError> {
    let mut config = OverviewConfig::default();
    let Some(overlay) = overlay else {
        return Ok(config);
    };

    if let Some(diff) = overlay.zoom_difference {
        config.zoom_difference = diff;
    }
    if let Some(raw) = overlay.border_color {
        config.border_color = parse_color("border_color", raw)?;
    }
    if let Some(raw) = overlay.background_color {
        config.background_color = parse_color("background_color", raw)?;
    }
    if let Some(enabled) = overlay.rectangle {
        config.rectangle_enabled = enabled;
    }
    if let Some(width) = overlay.rectangle_border_width {
        config.rectangle_border_width = width;
    }
    if let Some(raw) = overlay.rectangle_color {
        config.rectangle_color = parse_color("rectangle_color", raw)?;
    }
    if let Some(opacity) = overlay.rectangle_opacity {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ConfigError::InvalidOption {
                option: "rectangle_opacity",
                reason: format!("must be between 0 and 1, got {opacity}"),
            });
        }
        config.rectangle_opacity = opacity;
    }
    if let Some(icon) = overlay.up_icon {
        config.up_icon = icon;
    }
    if let Some(icon) = overlay.down_icon {
        config.down_icon = icon;
    }
    if let Some(width) = overlay.icon_width {
        config.icon_width = width;
    }
    if let Some(height) = overlay.icon_height {
        config.icon_height = height;
    }
    if let Some(width) = overlay.box_width {
        config.box_width = width;
    }
    if let Some(height) = overlay.box_height {
        config.box_height = height;
    }

    Ok(config)
}

fn parse_color(option: &'static str, raw: String) -> Result<Color, ConfigError> {
    Color::new(raw).map_err(|err| ConfigError::InvalidOption {
        option,
        reason: err.to_string(),
    })
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
