// SPDX-License-Identifier: MPL-2.0
//! Single-pane viewer: component state, pane view, and overlay rendering.

pub mod component;
pub mod markers;
pub mod overlay;
pub mod pane;

pub use markers::{color_for, layout as layout_markers, MarkerBox};
