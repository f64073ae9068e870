//! Rectangle drag-session state machine.
//!
//! A drag session lives between a mouse-down on the bounds rectangle and
//! the matching mouse-up, or ends early when the pointer escapes the
//! rectangle. Move samples are rate-limited and translate the rectangle by
//! the pointer delta since the previous accepted sample, so the rectangle
//! tracks the pointer incrementally instead of being re-anchored to the
//! mouse-down position.
//!
//! The machine owns no clock: callers pass the sample timestamp in, which
//! keeps every transition deterministic under test.

use crate::model::{LatLng, LatLngBounds};
use std::time::{Duration, Instant};

/// Minimum spacing between accepted drag-move samples.
///
/// Samples arriving faster than this are dropped, bounding the rate of
/// bounds recomputation and recentering during a drag.
pub const DRAG_SAMPLE_INTERVAL: Duration = Duration::from_millis(50);

// ===== DragState =====

/// Drag interaction state. Sum type - exactly one.
///
/// # State Transitions
///
/// - Idle -> Dragging: mouse-down on the rectangle ([`DragState::begin`])
/// - Dragging -> Dragging: accepted move sample ([`DragState::sample`])
/// - Dragging -> Idle: mouse-up ([`DragState::finish`]), or a move sample
///   whose pointer is outside the rectangle's current bounds
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress. Move samples are ignored.
    #[default]
    Idle,

    /// A drag is in progress; the session carries the incremental-delta
    /// anchor and the throttle timestamp.
    Dragging(DragSession),
}

/// Ephemeral per-drag state. Created on mouse-down, destroyed on mouse-up
/// or pointer exit; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position of the previous accepted sample (initially the
    /// mouse-down position). Deltas are computed against this, then it is
    /// advanced, so each accepted sample moves the rectangle by exactly the
    /// pointer movement since the last one.
    start_pointer: LatLng,

    /// Time of the previous accepted sample. `None` until the first move is
    /// accepted, so the first sample after mouse-down is never throttled.
    last_sample: Option<Instant>,
}

/// Result of feeding a pointer-move sample to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No drag in progress; the sample was ignored.
    Idle,

    /// The sample arrived within [`DRAG_SAMPLE_INTERVAL`] of the previous
    /// accepted one and was dropped.
    Throttled,

    /// The rectangle should move to these bounds.
    Moved(LatLngBounds),

    /// The pointer left the rectangle; the session has ended and both views
    /// should recenter on this point.
    Exited(LatLng),
}

impl DragState {
    /// Start a drag session at the mouse-down pointer position.
    ///
    /// A mouse-down while already dragging restarts the session; the widget
    /// runtime cannot deliver one without an intervening mouse-up, but a
    /// stale session must not survive it if it does.
    pub fn begin(&mut self, pointer: LatLng) {
        *self = DragState::Dragging(DragSession {
            start_pointer: pointer,
            last_sample: None,
        });
    }

    /// Feed a pointer-move sample.
    ///
    /// `current_bounds` are the rectangle's bounds as of this sample. The
    /// checks run in order: throttle first, then pointer containment, then
    /// translation - so a pointer that escapes inside the throttle window
    /// ends the session at the next accepted sample.
    pub fn sample(
        &mut self,
        pointer: LatLng,
        current_bounds: LatLngBounds,
        now: Instant,
    ) -> MoveOutcome {
        let DragState::Dragging(session) = self else {
            return MoveOutcome::Idle;
        };

        if let Some(last) = session.last_sample {
            if now.duration_since(last) < DRAG_SAMPLE_INTERVAL {
                return MoveOutcome::Throttled;
            }
        }

        if !current_bounds.contains(pointer) {
            let center = current_bounds.center();
            *self = DragState::Idle;
            return MoveOutcome::Exited(center);
        }

        let (dlat, dlng) = session.start_pointer.delta_to(pointer);
        session.start_pointer = pointer;
        session.last_sample = Some(now);
        MoveOutcome::Moved(current_bounds.translate(dlat, dlng))
    }

    /// End the session on mouse-up.
    ///
    /// Returns the center of the rectangle's final bounds, on which both
    /// views recenter, or `None` if no drag was in progress.
    pub fn finish(&mut self, current_bounds: LatLngBounds) -> Option<LatLng> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(_) => {
                *self = DragState::Idle;
                Some(current_bounds.center())
            }
        }
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "drag_tests.rs"]
mod tests;
