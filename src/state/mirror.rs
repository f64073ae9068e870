//! Zoom and pan mirroring rules.
//!
//! Pan mirroring is a direct center copy: on a host drag the inset center
//! becomes the host center, on an inset drag the host center becomes the
//! inset center. Each handler only reads the other view's state and writes
//! its own, so the mirror is idempotent under repeated identical events and
//! cannot feed back - programmatic recentering never synthesizes a drag
//! event (see [`MapEvent`](crate::widget::MapEvent)).
//!
//! Zoom mirroring is one-directional (host to inset) and thresholded; the
//! functions below are the whole rule.

/// Inset zoom for a given host zoom, if the host is zoomed in far enough.
///
/// Returns `Some(host_zoom - zoom_difference)` when `host_zoom` exceeds
/// `zoom_difference`, and `None` otherwise - below the threshold the inset
/// zoom is left unchanged rather than clamped, which keeps the inset from
/// ever being driven to a negative zoom level.
pub fn mirrored_zoom(host_zoom: i32, zoom_difference: i32) -> Option<i32> {
    if host_zoom > zoom_difference {
        Some(host_zoom - zoom_difference)
    } else {
        None
    }
}

/// Inset zoom for the manual reset gesture (double-click) and for initial
/// inset construction.
///
/// Unthresholded: the reset always re-derives the zoom from the host, even
/// when that lands at or below zero.
pub fn reset_zoom(host_zoom: i32, zoom_difference: i32) -> i32 {
    host_zoom - zoom_difference
}

// ===== Tests =====

#[cfg(test)]
#[path = "mirror_tests.rs"]
mod tests;
