//! Error types for the overview controller.
//!
//! The taxonomy is deliberately small: construction-time failures are the
//! only fallible paths. Event handlers never fail: an operation whose
//! target is not ready simply no-ops, since the widget's own error handling
//! is authoritative for everything below this layer.
//!
//! - [`OverviewError`] - top-level error wrapping the domain-specific kinds
//!   - [`WidgetError`] - view/overlay construction rejected by the backend
//!   - [`ConfigError`](crate::config::ConfigError) - config file or option
//!     validation failures

use thiserror::Error;

/// Top-level error for overview construction and attachment.
///
/// Domain-specific errors convert via `From`, so callers compose with `?`.
#[derive(Debug, Error)]
pub enum OverviewError {
    /// The widget backend refused to construct a view or overlay.
    #[error("Widget error: {0}")]
    Widget(#[from] WidgetError),

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Construction failures reported by a mapping-widget backend.
///
/// These carry the backend's own description; the controller does not
/// interpret them beyond logging and propagation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// The backend could not construct the inset view.
    #[error("Failed to construct inset view: {reason}")]
    ViewConstruction {
        /// Backend-provided description of the failure.
        reason: String,
    },

    /// The backend could not construct the rectangle overlay.
    #[error("Failed to construct rectangle overlay: {reason}")]
    OverlayConstruction {
        /// Backend-provided description of the failure.
        reason: String,
    },
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_error_display_includes_reason() {
        let err = WidgetError::ViewConstruction {
            reason: "container missing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("inset view"));
        assert!(msg.contains("container missing"));
    }

    #[test]
    fn overview_error_from_widget_error() {
        let widget_err = WidgetError::OverlayConstruction {
            reason: "no surface".to_string(),
        };
        let err: OverviewError = widget_err.into();
        let msg = err.to_string();
        assert!(msg.contains("Widget error"));
        assert!(msg.contains("rectangle overlay"));
    }

    #[test]
    fn overview_error_from_config_error() {
        let config_err = crate::config::ConfigError::InvalidOption {
            option: "rectangle_opacity",
            reason: "must be between 0 and 1".to_string(),
        };
        let err: OverviewError = config_err.into();
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("rectangle_opacity"));
    }
}
