// SPDX-License-Identifier: MPL-2.0
//! Headless interaction state for the comparison viewer.
//!
//! Everything in this module is plain state with no rendering dependency:
//! viewport pan/zoom, the measurement state machine, the annotation store,
//! the interaction mode, and the pane synchronization coordinator. Each
//! state transition runs synchronously on the UI thread in response to a
//! single pointer/scroll event.

pub mod annotation;
pub mod measurement;
pub mod mode;
pub mod sync;
pub mod viewport;
pub mod zoom;

pub use annotation::{Annotation, AnnotationStore};
pub use measurement::{MeasurementEngine, MeasurementRecord, Segment};
pub use mode::InteractionMode;
pub use sync::{PaneId, ScrollMirror, SyncCoordinator};
pub use viewport::{Transform, ViewportController};
pub use zoom::{SharedScale, ZoomDirection, ZoomScale};
