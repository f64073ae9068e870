//! Abstract mapping-widget capability set.
//!
//! The overview controller is written against these traits; the embedding
//! runtime implements them over its real map widget and forwards user
//! events as [`MapEvent`] values. A headless in-memory implementation for
//! tests and demos lives in [`sim`].

pub mod event;
pub mod sim;

pub use event::MapEvent;

use crate::config::RectangleStyle;
use crate::layout::{ContainerMetrics, InsetPlacement};
use crate::model::{LatLng, LatLngBounds, WidgetError};

// ===== View =====

/// Handle to one map view (the host map or the inset).
///
/// Implementations are expected to behave like handles: mutations apply to
/// the underlying widget immediately, and reads observe the widget's
/// current state. Programmatic mutation must NOT synthesize user-gesture
/// events - `set_center` on one view while mirroring the other is what
/// keeps the pan mirror from feeding back on itself.
pub trait MapView {
    /// Current center of the view.
    fn center(&self) -> LatLng;

    /// Recenter the view.
    fn set_center(&mut self, center: LatLng);

    /// Current integer zoom level.
    fn zoom(&self) -> i32;

    /// Set the zoom level.
    fn set_zoom(&mut self, zoom: i32);

    /// Currently visible geographic bounds.
    fn bounds(&self) -> LatLngBounds;

    /// Rendered metrics of the view's container element.
    fn container(&self) -> ContainerMetrics;

    /// Show or hide the view's container.
    fn set_visible(&mut self, visible: bool);
}

// ===== Rectangle overlay =====

/// Handle to a rectangle overlay attached to a view.
///
/// The overlay is attached at construction (see
/// [`ViewFactory::create_rectangle`]) and lives as long as its view; the
/// controller only ever reads and rewrites its bounds.
pub trait RectangleOverlay {
    /// The rectangle's current geographic bounds.
    fn bounds(&self) -> LatLngBounds;

    /// Move the rectangle to new bounds.
    fn set_bounds(&mut self, bounds: LatLngBounds);
}

// ===== Factory =====

/// Capability to construct inset views and rectangle overlays.
pub trait ViewFactory {
    /// View handle type produced by this factory.
    type View: MapView;

    /// Rectangle overlay handle type produced by this factory.
    type Rect: RectangleOverlay;

    /// Construct a view inside the host container at the given placement.
    fn create_view(&mut self, options: ViewOptions) -> Result<Self::View, WidgetError>;

    /// Construct a rectangle overlay with the given bounds and styling,
    /// attached to `view`.
    fn create_rectangle(
        &mut self,
        view: &mut Self::View,
        bounds: LatLngBounds,
        style: &RectangleStyle,
    ) -> Result<Self::Rect, WidgetError>;
}

// ===== View construction options =====

/// Base layer shown by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapType {
    /// Plain road map. The inset always uses this.
    Road,
    /// Aerial imagery.
    Satellite,
    /// Shaded relief.
    Terrain,
}

/// Options for constructing a view, mirroring the capability surface real
/// widgets expose: placement, initial viewport, and independently
/// disableable interactions.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOptions {
    /// Position and size within the host container.
    pub placement: InsetPlacement,
    /// Initial center.
    pub center: LatLng,
    /// Initial zoom level.
    pub zoom: i32,
    /// Base layer.
    pub map_type: MapType,
    /// Whether the user can pan the view by dragging.
    pub pannable: bool,
    /// Whether the widget shows its own zoom controls.
    pub zoomable: bool,
    /// Whether double-click zooms the view (the widget's built-in
    /// behavior, distinct from the double-click events it still reports).
    pub double_click_zoom: bool,
    /// Whether the scroll wheel zooms the view.
    pub scroll_wheel_zoom: bool,
}
