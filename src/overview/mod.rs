//! The overview controller.
//!
//! [`Overview`] owns the inset assembly (inset view handle, rectangle
//! overlay handle, toggle control, drag state) alongside a handle to the
//! host view and the widget factory, and applies the pure transition logic
//! from [`state`](crate::state) in response to forwarded [`MapEvent`]s.
//!
//! Every handler runs to completion synchronously and is the sole mutator
//! for its event type; a handler whose target does not exist yet (inset
//! not attached, rectangle disabled or not ready) no-ops.

use crate::config::OverviewConfig;
use crate::layout::{self, TogglePlacement};
use crate::model::{LatLng, LatLngBounds, WidgetError};
use crate::state::{mirrored_zoom, reset_zoom, DragState, InsetVisibility, MoveOutcome, ToggleControl};
use crate::widget::{MapEvent, MapType, MapView, RectangleOverlay, ViewFactory, ViewOptions};
use std::time::Instant;
use tracing::{debug, info, trace, warn};

/// The inset assembly, created once by [`Overview::attach`].
struct Inset<F: ViewFactory> {
    view: F::View,
    rectangle: Option<F::Rect>,
    toggle: ToggleControl,
    drag: DragState,
    ready_seen: bool,
}

/// Keeps a secondary overview view in sync with a host view.
///
/// Built by explicit composition: construct with a host-view handle and a
/// resolved configuration, call [`attach`](Overview::attach) once, then
/// forward runtime events into [`handle_event`](Overview::handle_event).
pub struct Overview<F: ViewFactory> {
    factory: F,
    host: F::View,
    config: OverviewConfig,
    inset: Option<Inset<F>>,
}

impl<F: ViewFactory> Overview<F> {
    /// Create a controller for `host`. No widget-side effects until
    /// [`attach`](Overview::attach).
    pub fn new(factory: F, host: F::View, config: OverviewConfig) -> Self {
        Self {
            factory,
            host,
            config,
            inset: None,
        }
    }

    /// Build the inset view at the bottom-right of the host container.
    ///
    /// Idempotent: once the inset exists, further calls are an `Ok` no-op.
    /// The inset starts at the host's center, zoomed out by the configured
    /// difference, pannable but with the widget's own zoom interactions
    /// disabled. The bounds rectangle is NOT created here - it appears on
    /// the first [`MapEvent::InsetReady`].
    pub fn attach(&mut self) -> Result<(), WidgetError> {
        if self.inset.is_some() {
            debug!("already attached, ignoring");
            return Ok(());
        }

        let metrics = self.host.container();
        let placement =
            layout::inset_placement(&metrics, self.config.box_width, self.config.box_height);
        let zoom = reset_zoom(self.host.zoom(), self.config.zoom_difference);

        let view = self.factory.create_view(ViewOptions {
            placement,
            center: self.host.center(),
            zoom,
            map_type: MapType::Road,
            pannable: true,
            zoomable: false,
            double_click_zoom: false,
            scroll_wheel_zoom: false,
        })?;

        info!(
            top = placement.top,
            left = placement.left,
            zoom,
            "overview inset attached"
        );

        self.inset = Some(Inset {
            view,
            rectangle: None,
            toggle: ToggleControl::new(
                self.config.up_icon.as_str(),
                self.config.down_icon.as_str(),
            ),
            drag: DragState::default(),
            ready_seen: false,
        });
        Ok(())
    }

    /// Process one runtime event. `now` is the delivery timestamp, used
    /// only to throttle rectangle drag samples.
    pub fn handle_event(&mut self, event: MapEvent, now: Instant) {
        match event {
            MapEvent::HostZoomChanged => self.on_host_zoom_changed(),
            MapEvent::HostDrag => self.on_host_drag(),
            MapEvent::InsetDrag => self.on_inset_drag(),
            MapEvent::InsetDoubleClick => self.on_inset_double_click(),
            MapEvent::InsetReady => self.on_inset_ready(),
            MapEvent::RectMouseDown { pointer } => self.on_rect_mouse_down(pointer),
            MapEvent::RectMouseMove { pointer } => self.on_rect_mouse_move(pointer, now),
            MapEvent::RectMouseUp => self.on_rect_mouse_up(),
            MapEvent::ToggleClicked => self.on_toggle_clicked(),
        }
    }

    // ===== Event handlers =====

    fn on_host_zoom_changed(&mut self) {
        let Some(inset) = self.inset.as_mut() else {
            return;
        };
        if let Some(zoom) = mirrored_zoom(self.host.zoom(), self.config.zoom_difference) {
            inset.view.set_zoom(zoom);
            debug!(zoom, "mirrored host zoom to inset");
        }
    }

    fn on_host_drag(&mut self) {
        let Some(inset) = self.inset.as_mut() else {
            return;
        };
        inset.view.set_center(self.host.center());
    }

    fn on_inset_drag(&mut self) {
        let Some(inset) = self.inset.as_ref() else {
            return;
        };
        self.host.set_center(inset.view.center());
    }

    fn on_inset_double_click(&mut self) {
        let Some(inset) = self.inset.as_mut() else {
            return;
        };
        inset
            .view
            .set_zoom(reset_zoom(self.host.zoom(), self.config.zoom_difference));
        inset.view.set_center(self.host.center());
        debug!("inset reset to host view");
    }

    fn on_inset_ready(&mut self) {
        let Some(inset) = self.inset.as_mut() else {
            return;
        };
        if inset.ready_seen {
            return;
        }
        inset.ready_seen = true;

        if !self.config.rectangle_enabled {
            return;
        }

        let style = self.config.rectangle_style();
        match self
            .factory
            .create_rectangle(&mut inset.view, self.host.bounds(), &style)
        {
            Ok(rectangle) => {
                info!("bounds rectangle created");
                inset.rectangle = Some(rectangle);
            }
            // Presentation glue: a missing rectangle degrades the inset,
            // it must not take the host map down with it.
            Err(err) => warn!(%err, "bounds rectangle construction failed"),
        }
    }

    fn on_rect_mouse_down(&mut self, pointer: LatLng) {
        let Some(inset) = self.inset.as_mut() else {
            return;
        };
        if inset.rectangle.is_none() {
            return;
        }
        inset.drag.begin(pointer);
        debug!(%pointer, "rectangle drag started");
    }

    fn on_rect_mouse_move(&mut self, pointer: LatLng, now: Instant) {
        let Some(inset) = self.inset.as_mut() else {
            return;
        };
        let Some(rectangle) = inset.rectangle.as_mut() else {
            return;
        };

        match inset.drag.sample(pointer, rectangle.bounds(), now) {
            MoveOutcome::Moved(bounds) => {
                rectangle.set_bounds(bounds);
                trace!(%pointer, %bounds, "rectangle moved");
            }
            MoveOutcome::Exited(center) => {
                inset.view.set_center(center);
                self.host.set_center(center);
                debug!(%center, "pointer left rectangle, drag ended");
            }
            MoveOutcome::Throttled | MoveOutcome::Idle => {}
        }
    }

    fn on_rect_mouse_up(&mut self) {
        let Some(inset) = self.inset.as_mut() else {
            return;
        };
        let Some(rectangle) = inset.rectangle.as_ref() else {
            return;
        };

        if let Some(center) = inset.drag.finish(rectangle.bounds()) {
            inset.view.set_center(center);
            self.host.set_center(center);
            debug!(%center, "rectangle drag finished");
        }
    }

    fn on_toggle_clicked(&mut self) {
        let Some(inset) = self.inset.as_mut() else {
            return;
        };
        let visibility = inset.toggle.toggle();
        inset.view.set_visible(visibility.is_expanded());
        debug!(?visibility, "inset visibility toggled");
    }

    // ===== Accessors =====

    /// Whether [`attach`](Overview::attach) has built the inset.
    pub fn is_attached(&self) -> bool {
        self.inset.is_some()
    }

    /// Handle to the host view.
    pub fn host(&self) -> &F::View {
        &self.host
    }

    /// Handle to the inset view, once attached.
    pub fn inset_view(&self) -> Option<&F::View> {
        self.inset.as_ref().map(|inset| &inset.view)
    }

    /// The bounds rectangle's current bounds, once created.
    pub fn rectangle_bounds(&self) -> Option<LatLngBounds> {
        self.inset
            .as_ref()?
            .rectangle
            .as_ref()
            .map(RectangleOverlay::bounds)
    }

    /// Current collapse/expand state, once attached.
    pub fn visibility(&self) -> Option<InsetVisibility> {
        self.inset.as_ref().map(|inset| inset.toggle.visibility())
    }

    /// Icon the toggle control should display, once attached.
    pub fn toggle_icon(&self) -> Option<&str> {
        self.inset.as_ref().map(|inset| inset.toggle.icon())
    }

    /// Whether a rectangle drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.inset
            .as_ref()
            .is_some_and(|inset| inset.drag.is_dragging())
    }

    /// Where the embedding runtime should place the toggle control,
    /// derived from the host container's current metrics.
    pub fn toggle_placement(&self) -> TogglePlacement {
        layout::toggle_placement(
            &self.host.container(),
            self.config.icon_width,
            self.config.icon_height,
        )
    }

    /// The resolved configuration this instance was built with.
    pub fn config(&self) -> &OverviewConfig {
        &self.config
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "overview_tests.rs"]
mod tests;
