//! Tests for the zoom mirroring rules.

use super::*;

#[test]
fn mirrors_zoom_above_threshold() {
    assert_eq!(mirrored_zoom(14, 4), Some(10));
    assert_eq!(mirrored_zoom(5, 4), Some(1));
    assert_eq!(mirrored_zoom(20, 3), Some(17));
}

#[test]
fn leaves_zoom_unchanged_at_threshold() {
    // host zoom must strictly exceed the difference
    assert_eq!(mirrored_zoom(4, 4), None);
}

#[test]
fn leaves_zoom_unchanged_below_threshold() {
    assert_eq!(mirrored_zoom(3, 4), None);
    assert_eq!(mirrored_zoom(0, 4), None);
}

#[test]
fn mirrored_zoom_never_yields_non_positive_zoom() {
    for host_zoom in 0..=21 {
        for diff in 0..=10 {
            if let Some(zoom) = mirrored_zoom(host_zoom, diff) {
                assert!(
                    zoom > 0,
                    "host {host_zoom} diff {diff} produced zoom {zoom}"
                );
            }
        }
    }
}

#[test]
fn reset_zoom_is_unthresholded() {
    assert_eq!(reset_zoom(14, 4), 10);
    assert_eq!(reset_zoom(4, 4), 0);
    assert_eq!(reset_zoom(2, 4), -2);
}
