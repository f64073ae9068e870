//! Collapse/expand state for the inset.
//!
//! Two states, toggled only by an explicit click on the corner control.
//! The control's arrow points in the direction the inset will move: down
//! (to collapse) while expanded, up (to restore) while collapsed.

// ===== InsetVisibility =====

/// Whether the inset map is currently shown. Sum type - exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsetVisibility {
    /// The inset is visible.
    #[default]
    Expanded,

    /// The inset is hidden; only the toggle control remains.
    Collapsed,
}

impl InsetVisibility {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            InsetVisibility::Expanded => InsetVisibility::Collapsed,
            InsetVisibility::Collapsed => InsetVisibility::Expanded,
        }
    }

    /// Whether the inset view should be shown in this state.
    pub fn is_expanded(self) -> bool {
        matches!(self, InsetVisibility::Expanded)
    }
}

// ===== ToggleControl =====

/// The collapse/expand control: current visibility plus the configured
/// icon pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    visibility: InsetVisibility,
    up_icon: String,
    down_icon: String,
}

impl ToggleControl {
    /// Create a control in the expanded state.
    pub fn new(up_icon: impl Into<String>, down_icon: impl Into<String>) -> Self {
        Self {
            visibility: InsetVisibility::Expanded,
            up_icon: up_icon.into(),
            down_icon: down_icon.into(),
        }
    }

    /// Flip the visibility state; returns the new state.
    pub fn toggle(&mut self) -> InsetVisibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    /// Current visibility state.
    pub fn visibility(&self) -> InsetVisibility {
        self.visibility
    }

    /// Icon to display for the current state.
    pub fn icon(&self) -> &str {
        match self.visibility {
            InsetVisibility::Expanded => &self.down_icon,
            InsetVisibility::Collapsed => &self.up_icon,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "inset_tests.rs"]
mod tests;
