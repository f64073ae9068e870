//! Synchronization state machines (pure).
//!
//! All transitions here are side-effect-free and testable without a widget
//! backend; the [`overview`](crate::overview) controller applies their
//! outcomes to widget handles.

pub mod drag;
pub mod inset;
pub mod mirror;

// Re-export for convenience
pub use drag::{DragState, MoveOutcome, DRAG_SAMPLE_INTERVAL};
pub use inset::{InsetVisibility, ToggleControl};
pub use mirror::{mirrored_zoom, reset_zoom};
