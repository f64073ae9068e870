//! Headless widget backend for tests and demos.
//!
//! [`SimView`], [`SimRectangle`] and [`SimFactory`] are cloneable handles
//! over shared in-memory state, the way real widget handles behave: any
//! clone observes mutations made through any other. Views additionally
//! record every mutation so tests can assert on exactly what the
//! controller did.

use crate::config::RectangleStyle;
use crate::layout::ContainerMetrics;
use crate::model::{LatLng, LatLngBounds, WidgetError};
use crate::widget::{MapView, RectangleOverlay, ViewFactory, ViewOptions};
use std::cell::RefCell;
use std::rc::Rc;

// ===== SimView =====

/// A mutation applied to a [`SimView`] through the [`MapView`] interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimMutation {
    /// `set_center` was called.
    Center(LatLng),
    /// `set_zoom` was called.
    Zoom(i32),
    /// `set_visible` was called.
    Visibility(bool),
}

#[derive(Debug)]
struct SimViewState {
    center: LatLng,
    zoom: i32,
    visible: bool,
    lat_span: f64,
    lng_span: f64,
    metrics: ContainerMetrics,
    mutations: Vec<SimMutation>,
}

/// Cloneable handle to a simulated map view.
#[derive(Debug, Clone)]
pub struct SimView {
    shared: Rc<RefCell<SimViewState>>,
}

impl SimView {
    /// Create a view with an 800x600 borderless container and a 1x1 degree
    /// visible span.
    pub fn new(center: LatLng, zoom: i32) -> Self {
        Self {
            shared: Rc::new(RefCell::new(SimViewState {
                center,
                zoom,
                visible: true,
                lat_span: 1.0,
                lng_span: 1.0,
                metrics: ContainerMetrics {
                    client_width: 800,
                    client_height: 600,
                    border_bottom_width: "0px".to_string(),
                    border_left_width: "0px".to_string(),
                },
                mutations: Vec::new(),
            })),
        }
    }

    /// Override the visible span (degrees of latitude/longitude).
    pub fn with_span(self, lat_span: f64, lng_span: f64) -> Self {
        {
            let mut state = self.shared.borrow_mut();
            state.lat_span = lat_span;
            state.lng_span = lng_span;
        }
        self
    }

    /// Override the container metrics.
    pub fn with_metrics(self, metrics: ContainerMetrics) -> Self {
        self.shared.borrow_mut().metrics = metrics;
        self
    }

    /// Whether the view is currently shown.
    pub fn is_visible(&self) -> bool {
        self.shared.borrow().visible
    }

    /// Every mutation applied through the [`MapView`] interface, in order.
    pub fn mutations(&self) -> Vec<SimMutation> {
        self.shared.borrow().mutations.clone()
    }
}

impl MapView for SimView {
    fn center(&self) -> LatLng {
        self.shared.borrow().center
    }

    fn set_center(&mut self, center: LatLng) {
        let mut state = self.shared.borrow_mut();
        state.center = center;
        state.mutations.push(SimMutation::Center(center));
    }

    fn zoom(&self) -> i32 {
        self.shared.borrow().zoom
    }

    fn set_zoom(&mut self, zoom: i32) {
        let mut state = self.shared.borrow_mut();
        state.zoom = zoom;
        state.mutations.push(SimMutation::Zoom(zoom));
    }

    fn bounds(&self) -> LatLngBounds {
        let state = self.shared.borrow();
        let half_lat = state.lat_span / 2.0;
        let half_lng = state.lng_span / 2.0;
        LatLngBounds::new(
            state.center.offset_by(-half_lat, -half_lng),
            state.center.offset_by(half_lat, half_lng),
        )
    }

    fn container(&self) -> ContainerMetrics {
        self.shared.borrow().metrics.clone()
    }

    fn set_visible(&mut self, visible: bool) {
        let mut state = self.shared.borrow_mut();
        state.visible = visible;
        state.mutations.push(SimMutation::Visibility(visible));
    }
}

// ===== SimRectangle =====

#[derive(Debug)]
struct SimRectState {
    bounds: LatLngBounds,
    style: RectangleStyle,
    set_count: usize,
}

/// Cloneable handle to a simulated rectangle overlay.
#[derive(Debug, Clone)]
pub struct SimRectangle {
    shared: Rc<RefCell<SimRectState>>,
}

impl SimRectangle {
    fn new(bounds: LatLngBounds, style: RectangleStyle) -> Self {
        Self {
            shared: Rc::new(RefCell::new(SimRectState {
                bounds,
                style,
                set_count: 0,
            })),
        }
    }

    /// The styling the overlay was constructed with.
    pub fn style(&self) -> RectangleStyle {
        self.shared.borrow().style.clone()
    }

    /// How many times `set_bounds` has been called.
    pub fn set_count(&self) -> usize {
        self.shared.borrow().set_count
    }
}

impl RectangleOverlay for SimRectangle {
    fn bounds(&self) -> LatLngBounds {
        self.shared.borrow().bounds
    }

    fn set_bounds(&mut self, bounds: LatLngBounds) {
        let mut state = self.shared.borrow_mut();
        state.bounds = bounds;
        state.set_count += 1;
    }
}

// ===== SimFactory =====

#[derive(Debug, Default)]
struct SimFactoryState {
    created_views: Vec<ViewOptions>,
    view_handles: Vec<SimView>,
    rectangle_handles: Vec<SimRectangle>,
    fail_next_view: bool,
    fail_next_rectangle: bool,
}

/// Cloneable handle to a simulated view factory.
///
/// Tests keep a clone of the factory before handing it to the controller,
/// then inspect what was created through it.
#[derive(Debug, Clone, Default)]
pub struct SimFactory {
    shared: Rc<RefCell<SimFactoryState>>,
}

impl SimFactory {
    /// Create an empty factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `create_view` call fail.
    pub fn fail_next_view(&self) {
        self.shared.borrow_mut().fail_next_view = true;
    }

    /// Make the next `create_rectangle` call fail.
    pub fn fail_next_rectangle(&self) {
        self.shared.borrow_mut().fail_next_rectangle = true;
    }

    /// Options of every view constructed so far, in order.
    pub fn created_view_options(&self) -> Vec<ViewOptions> {
        self.shared.borrow().created_views.clone()
    }

    /// Handles to every view constructed so far.
    pub fn created_views(&self) -> Vec<SimView> {
        self.shared.borrow().view_handles.clone()
    }

    /// Handles to every rectangle constructed so far.
    pub fn created_rectangles(&self) -> Vec<SimRectangle> {
        self.shared.borrow().rectangle_handles.clone()
    }
}

impl ViewFactory for SimFactory {
    type View = SimView;
    type Rect = SimRectangle;

    fn create_view(&mut self, options: ViewOptions) -> Result<SimView, WidgetError> {
        let mut state = self.shared.borrow_mut();
        if state.fail_next_view {
            state.fail_next_view = false;
            return Err(WidgetError::ViewConstruction {
                reason: "simulated view failure".to_string(),
            });
        }

        let view = SimView::new(options.center, options.zoom);
        state.created_views.push(options);
        state.view_handles.push(view.clone());
        Ok(view)
    }

    fn create_rectangle(
        &mut self,
        _view: &mut SimView,
        bounds: LatLngBounds,
        style: &RectangleStyle,
    ) -> Result<SimRectangle, WidgetError> {
        let mut state = self.shared.borrow_mut();
        if state.fail_next_rectangle {
            state.fail_next_rectangle = false;
            return Err(WidgetError::OverlayConstruction {
                reason: "simulated overlay failure".to_string(),
            });
        }

        let rectangle = SimRectangle::new(bounds, style.clone());
        state.rectangle_handles.push(rectangle.clone());
        Ok(rectangle)
    }
}

// ===== Tests =====
