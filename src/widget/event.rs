//! Event vocabulary delivered by the widget runtime.

use crate::model::LatLng;

/// A user-interaction or lifecycle event forwarded by the embedding
/// runtime to [`Overview::handle_event`](crate::overview::Overview::handle_event).
///
/// Events are delivered in runtime order and processed to completion one at
/// a time. Drag events report user gestures only - a view recentered
/// programmatically must not re-emit them, which is what makes the
/// bidirectional pan mirror free of feedback loops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// The host view's zoom level changed.
    HostZoomChanged,

    /// The user dragged the host view.
    HostDrag,

    /// The user dragged the inset view.
    InsetDrag,

    /// The user double-clicked the inset view (manual reset gesture).
    InsetDoubleClick,

    /// The inset view finished its first render. Meaningful once; later
    /// deliveries are ignored.
    InsetReady,

    /// Mouse-down on the bounds rectangle, with the pointer's geographic
    /// position.
    RectMouseDown {
        /// Pointer position at the press.
        pointer: LatLng,
    },

    /// Pointer moved during a rectangle drag.
    RectMouseMove {
        /// Current pointer position.
        pointer: LatLng,
    },

    /// Mouse released over the bounds rectangle.
    RectMouseUp,

    /// The collapse/expand control was clicked.
    ToggleClicked,
}
