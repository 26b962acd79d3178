// SPDX-License-Identifier: MPL-2.0
//! Viewport pan/zoom state for one pane.
//!
//! Maintains the `(offset, scale)` pair behind the image transform and the
//! grab-and-drag anchor used while panning. The transform is a pure function
//! of the current state: translate by the offset, then scale, origin at the
//! pane's top-left corner.

use crate::ui::state::zoom::{SharedScale, ZoomDirection, ZoomScale};
use iced::Point;

/// The combined image transform of a pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Transform {
    /// Applies the transform to a point in untransformed pane coordinates.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale + self.offset_x,
            point.y * self.scale + self.offset_y,
        )
    }
}

/// Where a pane's scale comes from.
///
/// While the pane pair is synced the scale is backed by the coordinator's
/// single shared value; otherwise the pane owns an independent one.
#[derive(Debug, Clone)]
enum ScaleSource {
    Local(ZoomScale),
    Shared(SharedScale),
}

/// Pan/zoom state for one image pane.
#[derive(Debug, Clone)]
pub struct ViewportController {
    offset: Point,
    drag_anchor: Option<Point>,
    scale: ScaleSource,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self {
            offset: Point::ORIGIN,
            drag_anchor: None,
            scale: ScaleSource::Local(ZoomScale::default()),
        }
    }
}

impl ViewportController {
    /// Starts a pan drag; the anchor is the pointer position minus the
    /// current offset, so the image follows the pointer exactly.
    pub fn begin_drag(&mut self, position: Point) {
        self.drag_anchor = Some(Point::new(
            position.x - self.offset.x,
            position.y - self.offset.y,
        ));
    }

    /// Updates the offset while a drag is in progress; ignored otherwise.
    pub fn update_drag(&mut self, position: Point) {
        if let Some(anchor) = self.drag_anchor {
            self.offset = Point::new(position.x - anchor.x, position.y - anchor.y);
        }
    }

    /// Ends the pan drag.
    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Whether a pan drag is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Applies one zoom step. A no-op while the scale is externally driven
    /// by the shared value (synced mode); shared zoom routes through the
    /// coordinator instead.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        if let ScaleSource::Local(scale) = &mut self.scale {
            *scale = scale.stepped(direction);
        }
    }

    /// Resets to the mount defaults: offset `(0, 0)`, scale `1`. When the
    /// scale is shared, the reset writes through to the shared value.
    pub fn reset(&mut self) {
        self.offset = Point::ORIGIN;
        self.drag_anchor = None;
        match &mut self.scale {
            ScaleSource::Local(scale) => *scale = ZoomScale::default(),
            ScaleSource::Shared(shared) => shared.set(ZoomScale::default()),
        }
    }

    /// The current scale, wherever it is backed.
    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        match &self.scale {
            ScaleSource::Local(scale) => *scale,
            ScaleSource::Shared(shared) => shared.get(),
        }
    }

    /// The current pan offset.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Whether the scale is driven by the coordinator's shared value.
    #[must_use]
    pub fn is_scale_shared(&self) -> bool {
        matches!(self.scale, ScaleSource::Shared(_))
    }

    /// Attaches the pane to the coordinator's shared scale (sync enabled).
    pub fn attach_shared_scale(&mut self, shared: SharedScale) {
        self.scale = ScaleSource::Shared(shared);
    }

    /// Detaches from the shared scale, keeping the last observed value as
    /// the pane's own. Past divergence is not reconciled.
    pub fn detach_shared_scale(&mut self) {
        if let ScaleSource::Shared(shared) = &self.scale {
            self.scale = ScaleSource::Local(shared.get());
        }
    }

    /// The combined transform: translate by the offset, then scale,
    /// origin top-left. Pure function of the current state.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            offset_x: self.offset.x,
            offset_y: self.offset.y,
            scale: self.scale().value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_viewport_is_identity() {
        let viewport = ViewportController::default();
        let transform = viewport.transform();
        assert_abs_diff_eq!(transform.offset_x, 0.0);
        assert_abs_diff_eq!(transform.offset_y, 0.0);
        assert_abs_diff_eq!(transform.scale, 1.0);
        assert!(!viewport.is_dragging());
    }

    #[test]
    fn drag_moves_offset_with_pointer() {
        let mut viewport = ViewportController::default();

        viewport.begin_drag(Point::new(100.0, 50.0));
        viewport.update_drag(Point::new(130.0, 45.0));

        assert_abs_diff_eq!(viewport.offset().x, 30.0);
        assert_abs_diff_eq!(viewport.offset().y, -5.0);

        viewport.end_drag();
        viewport.update_drag(Point::new(500.0, 500.0));
        // Moves after the drag ended are ignored.
        assert_abs_diff_eq!(viewport.offset().x, 30.0);
    }

    #[test]
    fn drag_anchor_accounts_for_existing_offset() {
        let mut viewport = ViewportController::default();
        viewport.begin_drag(Point::new(10.0, 10.0));
        viewport.update_drag(Point::new(20.0, 20.0));
        viewport.end_drag();

        viewport.begin_drag(Point::new(0.0, 0.0));
        viewport.update_drag(Point::new(5.0, 5.0));
        assert_abs_diff_eq!(viewport.offset().x, 15.0);
        assert_abs_diff_eq!(viewport.offset().y, 15.0);
    }

    #[test]
    fn zoom_steps_local_scale() {
        let mut viewport = ViewportController::default();
        viewport.zoom(ZoomDirection::In);
        assert_abs_diff_eq!(viewport.scale().value(), 1.2);
        viewport.zoom(ZoomDirection::Out);
        assert_abs_diff_eq!(viewport.scale().value(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn zoom_is_inert_while_scale_is_shared() {
        let shared = SharedScale::new();
        let mut viewport = ViewportController::default();
        viewport.attach_shared_scale(shared.clone());

        viewport.zoom(ZoomDirection::In);
        assert_abs_diff_eq!(viewport.scale().value(), 1.0);
        assert_abs_diff_eq!(shared.get().value(), 1.0);
    }

    #[test]
    fn detach_keeps_last_shared_value() {
        let shared = SharedScale::new();
        shared.set(ZoomScale::new(2.0));

        let mut viewport = ViewportController::default();
        viewport.attach_shared_scale(shared.clone());
        viewport.detach_shared_scale();

        shared.set(ZoomScale::new(3.0));
        // Later shared updates no longer reach the detached pane.
        assert_abs_diff_eq!(viewport.scale().value(), 2.0);
    }

    #[test]
    fn reset_restores_defaults_regardless_of_prior_state() {
        let mut viewport = ViewportController::default();
        viewport.begin_drag(Point::new(0.0, 0.0));
        viewport.update_drag(Point::new(80.0, 60.0));
        viewport.zoom(ZoomDirection::In);
        viewport.zoom(ZoomDirection::In);

        viewport.reset();

        assert_abs_diff_eq!(viewport.offset().x, 0.0);
        assert_abs_diff_eq!(viewport.offset().y, 0.0);
        assert_abs_diff_eq!(viewport.scale().value(), 1.0);
        assert!(!viewport.is_dragging());
    }

    #[test]
    fn transform_applies_translate_then_scale() {
        let mut viewport = ViewportController::default();
        viewport.begin_drag(Point::ORIGIN);
        viewport.update_drag(Point::new(10.0, 20.0));
        viewport.end_drag();
        viewport.zoom(ZoomDirection::In);

        let point = viewport.transform().apply(Point::new(100.0, 100.0));
        assert_abs_diff_eq!(point.x, 130.0, epsilon = 1e-3);
        assert_abs_diff_eq!(point.y, 140.0, epsilon = 1e-3);
    }
}
