//! Event-flow tests: each event type drives exactly one mutator.
//!
//! The mutation logs recorded by the simulated views pin down not just the
//! final state but everything the controller wrote along the way - a
//! mirror that wrote twice, or a drag handler that recentered a view it
//! doesn't own, shows up here.

use crate::config::OverviewConfig;
use crate::model::LatLng;
use crate::overview::Overview;
use crate::widget::sim::{SimFactory, SimMutation, SimView};
use crate::widget::{MapEvent, MapView};
use std::time::{Duration, Instant};

const GALWAY: LatLng = LatLng::new(53.2762, -9.0551);

fn attached() -> (Overview<SimFactory>, SimView, SimView) {
    let factory = SimFactory::new();
    let host = SimView::new(GALWAY, 14);
    let mut overview = Overview::new(factory.clone(), host.clone(), OverviewConfig::default());
    overview.attach().expect("attach succeeds");
    overview.handle_event(MapEvent::InsetReady, Instant::now());
    let inset = factory.created_views()[0].clone();
    (overview, host, inset)
}

#[test]
fn host_drag_writes_inset_center_exactly_once() {
    let (mut overview, mut host, inset) = attached();
    host.set_center(LatLng::new(53.30, -9.10));
    let host_writes_before = host.mutations().len();

    overview.handle_event(MapEvent::HostDrag, Instant::now());

    assert_eq!(
        inset.mutations(),
        vec![SimMutation::Center(LatLng::new(53.30, -9.10))],
        "inset receives exactly one center write"
    );
    assert_eq!(
        host.mutations().len(),
        host_writes_before,
        "host is only read, never written, by its own drag"
    );
}

#[test]
fn inset_drag_writes_host_center_exactly_once() {
    let (mut overview, host, mut inset) = attached();
    inset.set_center(LatLng::new(53.0, -9.5));
    let inset_writes_before = inset.mutations().len();

    overview.handle_event(MapEvent::InsetDrag, Instant::now());

    assert_eq!(
        host.mutations(),
        vec![SimMutation::Center(LatLng::new(53.0, -9.5))],
        "host receives exactly one center write"
    );
    assert_eq!(inset.mutations().len(), inset_writes_before);
}

#[test]
fn zoom_change_below_threshold_writes_nothing() {
    let (mut overview, mut host, inset) = attached();
    host.set_zoom(2);
    overview.handle_event(MapEvent::HostZoomChanged, Instant::now());
    assert!(
        inset.mutations().is_empty(),
        "no sentinel zoom write below the threshold"
    );
}

#[test]
fn throttled_move_samples_write_nothing() {
    let (mut overview, host, inset) = attached();
    let t0 = Instant::now();

    overview.handle_event(MapEvent::RectMouseDown { pointer: GALWAY }, t0);
    overview.handle_event(
        MapEvent::RectMouseMove {
            pointer: GALWAY.offset_by(0.1, 0.0),
        },
        t0,
    );
    let writes_after_first = overview
        .rectangle_bounds()
        .map(|_| host.mutations().len() + inset.mutations().len())
        .expect("rectangle exists");

    for millis in [10_u64, 20, 30, 40] {
        overview.handle_event(
            MapEvent::RectMouseMove {
                pointer: GALWAY.offset_by(0.2, 0.0),
            },
            t0 + Duration::from_millis(millis),
        );
    }

    assert_eq!(
        host.mutations().len() + inset.mutations().len(),
        writes_after_first,
        "throttled samples must not touch either view"
    );
}

#[test]
fn full_session_event_order_is_preserved() {
    let (mut overview, mut host, inset) = attached();
    let t0 = Instant::now();

    // zoom, pan, drag-release: the inset's write log mirrors the order the
    // events arrived in.
    host.set_zoom(16);
    overview.handle_event(MapEvent::HostZoomChanged, t0);
    host.set_center(LatLng::new(53.30, -9.10));
    overview.handle_event(MapEvent::HostDrag, t0);
    overview.handle_event(MapEvent::RectMouseDown { pointer: GALWAY }, t0);
    overview.handle_event(MapEvent::RectMouseUp, t0);

    let final_rect_center = overview
        .rectangle_bounds()
        .expect("rectangle exists")
        .center();
    assert_eq!(
        inset.mutations(),
        vec![
            SimMutation::Zoom(12),
            SimMutation::Center(LatLng::new(53.30, -9.10)),
            SimMutation::Center(final_rect_center),
        ]
    );
}
