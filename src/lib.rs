//! Overview-map inset synchronizer (minimap)
//!
//! Keeps a small secondary "overview" map view in sync with a primary (host)
//! map view: pan and zoom mirroring in both directions, plus a draggable
//! rectangle on the inset depicting the host's visible bounds.
//!
//! The crate is written against an abstract mapping-widget capability set
//! (see [`widget`]); the pure synchronization logic lives in [`state`] and
//! [`layout`], and [`overview`] is the thin shell that applies it to widget
//! handles.

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod overview;
pub mod state;
pub mod widget;

#[cfg(test)]
mod tests;
