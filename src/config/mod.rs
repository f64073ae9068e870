//! Configuration module.
//!
//! [`OverviewConfig`] is the resolved option set for one overview instance,
//! immutable after construction. Callers either take the defaults, overlay a
//! partial [`ConfigFile`] loaded from TOML, or build the overlay in code.

pub mod loader;

pub use loader::{default_config_path, load_file, resolve, ConfigError, ConfigFile};

use crate::model::Color;

/// Resolved overview configuration.
///
/// Created by merging a partial overlay over hard-coded defaults (see
/// [`resolve`]). Immutable for the lifetime of one overview instance.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewConfig {
    /// Difference between the host zoom and the inset zoom.
    pub zoom_difference: i32,
    /// Border color of the inset box.
    pub border_color: Color,
    /// Background color of the inset frame.
    pub background_color: Color,
    /// Whether to draw the bounds rectangle on the inset.
    pub rectangle_enabled: bool,
    /// Stroke width of the bounds rectangle, in pixels.
    pub rectangle_border_width: u32,
    /// Fill and stroke color of the bounds rectangle.
    pub rectangle_color: Color,
    /// Fill opacity of the bounds rectangle, 0.0 (transparent) to 1.0.
    pub rectangle_opacity: f64,
    /// Icon shown on the toggle control while the inset is collapsed.
    pub up_icon: String,
    /// Icon shown on the toggle control while the inset is expanded.
    pub down_icon: String,
    /// Width of the toggle icons, in pixels.
    pub icon_width: u32,
    /// Height of the toggle icons, in pixels.
    pub icon_height: u32,
    /// Width of the inset map box, in pixels.
    pub box_width: u32,
    /// Height of the inset map box, in pixels.
    pub box_height: u32,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            zoom_difference: 4,
            border_color: default_color("979797"),
            background_color: default_color("e8ecf8"),
            rectangle_enabled: true,
            rectangle_border_width: 2,
            rectangle_color: default_color("00f"),
            rectangle_opacity: 0.3,
            up_icon: "up.png".to_string(),
            down_icon: "down.png".to_string(),
            icon_width: 15,
            icon_height: 15,
            box_width: 150,
            box_height: 150,
        }
    }
}

impl OverviewConfig {
    /// Styling for the bounds rectangle derived from this configuration.
    pub fn rectangle_style(&self) -> RectangleStyle {
        RectangleStyle {
            fill_color: self.rectangle_color.clone(),
            fill_opacity: self.rectangle_opacity,
            stroke_color: self.rectangle_color.clone(),
            stroke_width: self.rectangle_border_width,
            stroke_opacity: 1.0,
        }
    }
}

/// Fill and stroke styling for the bounds rectangle overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleStyle {
    /// Fill color.
    pub fill_color: Color,
    /// Fill opacity, 0.0 to 1.0.
    pub fill_opacity: f64,
    /// Stroke color.
    pub stroke_color: Color,
    /// Stroke width in pixels.
    pub stroke_width: u32,
    /// Stroke opacity, 0.0 to 1.0. Always fully opaque.
    pub stroke_opacity: f64,
}

/// Hard-coded default colors are known-valid hex literals.
fn default_color(hex: &'static str) -> Color {
    Color::new(hex).expect("default color literal is valid hex")
}

// ===== Tests =====
