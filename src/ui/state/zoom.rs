// SPDX-License-Identifier: MPL-2.0
//! Zoom scale management
//!
//! This module handles zoom scale state, including:
//! - A clamped scale newtype so invalid scales cannot exist
//! - Multiplicative zoom stepping
//! - The shared scale capability handed to synced panes

// Re-export scale constants from centralized config
pub use crate::config::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, ZOOM_STEP_FACTOR};

use std::cell::Cell;
use std::rc::Rc;

/// Direction of a zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Viewport scale, guaranteed to be within the valid range (0.5–4.0).
///
/// This type ensures that scale values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        Self(scale.clamp(MIN_SCALE, MAX_SCALE))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale as a whole percentage for display (1.0 → 100).
    #[must_use]
    pub fn as_percent(self) -> i32 {
        (self.0 * 100.0).round() as i32
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }

    /// Applies one multiplicative zoom step in the given direction.
    #[must_use]
    pub fn stepped(self, direction: ZoomDirection) -> Self {
        match direction {
            ZoomDirection::In => Self::new(self.0 * ZOOM_STEP_FACTOR),
            ZoomDirection::Out => Self::new(self.0 / ZOOM_STEP_FACTOR),
        }
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

/// Shared zoom scale for a synced pane pair.
///
/// Owned by the sync coordinator and injected into each pane's viewport as
/// a capability; while sync is enabled both panes read the same value, so
/// there is exactly one clamp and no partial-sharing state. Updates happen
/// on the single UI thread, hence `Rc<Cell<_>>` rather than a lock.
#[derive(Debug, Clone)]
pub struct SharedScale(Rc<Cell<f32>>);

impl SharedScale {
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(DEFAULT_SCALE)))
    }

    /// Reads the current shared scale.
    #[must_use]
    pub fn get(&self) -> ZoomScale {
        ZoomScale::new(self.0.get())
    }

    /// Writes a new shared scale; both panes observe it on the next redraw.
    pub fn set(&self, scale: ZoomScale) {
        self.0.set(scale.value());
    }

    /// Applies one zoom step to the shared value.
    pub fn step(&self, direction: ZoomDirection) {
        self.set(self.get().stepped(direction));
    }
}

impl Default for SharedScale {
    fn default() -> Self {
        Self::new()
    }
}
