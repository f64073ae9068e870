//! Inset placement within the host container.
//!
//! Positions are computed from the container metrics the layout system
//! reports, never from engine identity. Border widths arrive as raw CSS
//! length strings and parse defensively: anything that is not a leading
//! integer counts as zero.

/// Gap in pixels between the inset box and the container's bottom/right
/// edges.
pub const INSET_MARGIN_PX: i32 = 9;

/// Rendered metrics of the host view's container element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerMetrics {
    /// Inner width of the container, in pixels.
    pub client_width: u32,
    /// Inner height of the container, in pixels.
    pub client_height: u32,
    /// Raw bottom border width as reported by the layout system
    /// (e.g. `"2px"`).
    pub border_bottom_width: String,
    /// Raw left border width as reported by the layout system.
    pub border_left_width: String,
}

/// Computed position and size of the inset box, relative to the host
/// container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsetPlacement {
    /// Offset from the container top, in pixels. May be negative when the
    /// container is smaller than the inset.
    pub top: i32,
    /// Offset from the container left, in pixels.
    pub left: i32,
    /// Inset box width, in pixels.
    pub width: u32,
    /// Inset box height, in pixels.
    pub height: u32,
}

/// Computed position and size of the collapse/expand toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TogglePlacement {
    /// Offset from the container top, in pixels.
    pub top: i32,
    /// Offset from the container left, in pixels.
    pub left: i32,
    /// Icon width, in pixels.
    pub width: u32,
    /// Icon height, in pixels.
    pub height: u32,
}

/// Parse a CSS length like `"2px"` to its integer pixel count.
///
/// Takes the leading run of ASCII digits; any parse failure (empty string,
/// keyword widths like `"thin"`) falls back to 0 rather than propagating.
pub fn parse_px(raw: &str) -> i32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Place the inset box at the bottom-right of the host container.
pub fn inset_placement(metrics: &ContainerMetrics, box_width: u32, box_height: u32) -> InsetPlacement {
    let border_bottom = parse_px(&metrics.border_bottom_width);
    let border_left = parse_px(&metrics.border_left_width);

    InsetPlacement {
        top: metrics.client_height as i32 - (box_height as i32 + INSET_MARGIN_PX + border_bottom),
        left: metrics.client_width as i32 - (box_width as i32 + INSET_MARGIN_PX) + border_left,
        width: box_width,
        height: box_height,
    }
}

/// Place the toggle control flush with the container's bottom-right corner.
pub fn toggle_placement(metrics: &ContainerMetrics, icon_width: u32, icon_height: u32) -> TogglePlacement {
    TogglePlacement {
        top: metrics.client_height as i32 - icon_height as i32,
        left: metrics.client_width as i32 - icon_width as i32,
        width: icon_width,
        height: icon_height,
    }
}

// ===== Tests =====
