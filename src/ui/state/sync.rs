// SPDX-License-Identifier: MPL-2.0
//! Pane pair synchronization.
//!
//! The coordinator owns the sync flag and the shared zoom scale for the
//! two panes. While synced, a scroll event from one pane is mirrored to
//! its sibling exactly once. Programmatic mirror writes go through widget
//! operations and never come back as `on_scroll` events, so every event
//! the coordinator sees is a user scroll. Only the most recent source
//! event matters; nothing is queued.

use crate::ui::state::zoom::{SharedScale, ZoomDirection, ZoomScale};
use iced::widget::scrollable::AbsoluteOffset;

/// Stable identifier for one of the two comparison panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneId {
    /// The patient's scan under review.
    Base,
    /// The retrieved similar case.
    Compare,
}

impl PaneId {
    /// The other pane of the pair.
    #[must_use]
    pub fn sibling(self) -> Self {
        match self {
            PaneId::Base => PaneId::Compare,
            PaneId::Compare => PaneId::Base,
        }
    }

    /// Widget identifier of the pane's scrollable.
    #[must_use]
    pub fn scrollable_id(self) -> &'static str {
        match self {
            PaneId::Base => "base-ecg-pane",
            PaneId::Compare => "compare-ecg-pane",
        }
    }
}

/// A scroll write the application must apply to the sibling pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMirror {
    pub target: PaneId,
    pub offset: AbsoluteOffset,
}

/// Shared scroll/zoom state for the pane pair.
#[derive(Debug, Clone)]
pub struct SyncCoordinator {
    enabled: bool,
    shared_scale: SharedScale,
}

impl SyncCoordinator {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            shared_scale: SharedScale::new(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables synchronization. Turning it off only stops
    /// future sharing; already-divergent state is not reconciled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The shared scale capability to inject into synced panes.
    #[must_use]
    pub fn shared_scale(&self) -> SharedScale {
        self.shared_scale.clone()
    }

    /// Handles a scroll event raised by `source`. Returns the mirror write
    /// for the sibling, or `None` when sync is off.
    pub fn handle_scroll(&mut self, source: PaneId, offset: AbsoluteOffset) -> Option<ScrollMirror> {
        if !self.enabled {
            return None;
        }

        Some(ScrollMirror {
            target: source.sibling(),
            offset,
        })
    }

    /// Steps the shared zoom scale; both synced panes observe the result.
    /// Ignored while sync is off (each pane zooms itself then).
    pub fn zoom(&mut self, direction: ZoomDirection) {
        if self.enabled {
            self.shared_scale.step(direction);
        }
    }

    /// Resets the shared scale to the default.
    pub fn reset_scale(&mut self) {
        self.shared_scale.set(ZoomScale::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn offset(x: f32, y: f32) -> AbsoluteOffset {
        AbsoluteOffset { x, y }
    }

    #[test]
    fn scroll_is_mirrored_to_sibling_when_enabled() {
        let mut sync = SyncCoordinator::new(true);
        let mirror = sync
            .handle_scroll(PaneId::Base, offset(0.0, 120.0))
            .expect("mirror");

        assert_eq!(mirror.target, PaneId::Compare);
        assert_abs_diff_eq!(mirror.offset.y, 120.0);
    }

    #[test]
    fn scroll_is_not_mirrored_when_disabled() {
        let mut sync = SyncCoordinator::new(false);
        assert!(sync.handle_scroll(PaneId::Base, offset(0.0, 120.0)).is_none());
    }

    #[test]
    fn scrolls_from_alternating_panes_each_mirror() {
        let mut sync = SyncCoordinator::new(true);
        sync.handle_scroll(PaneId::Base, offset(0.0, 100.0))
            .expect("mirror");

        // Mirror writes do not raise scroll events, so the next event from
        // the other pane is a user scroll and must mirror back.
        let mirror = sync
            .handle_scroll(PaneId::Compare, offset(0.0, 300.0))
            .expect("mirror");
        assert_eq!(mirror.target, PaneId::Base);
        assert_abs_diff_eq!(mirror.offset.y, 300.0);
    }

    #[test]
    fn bursts_mirror_the_most_recent_value() {
        let mut sync = SyncCoordinator::new(true);
        let mut last = None;
        for y in [10.0, 20.0, 30.0] {
            // Each event from the same source replaces the previous mirror.
            last = sync.handle_scroll(PaneId::Base, offset(0.0, y));
        }
        assert_abs_diff_eq!(last.expect("mirror").offset.y, 30.0);
    }

    #[test]
    fn toggling_sync_off_and_on_resumes_mirroring() {
        let mut sync = SyncCoordinator::new(true);
        sync.handle_scroll(PaneId::Base, offset(0.0, 50.0));

        sync.set_enabled(false);
        assert!(sync.handle_scroll(PaneId::Base, offset(0.0, 60.0)).is_none());

        sync.set_enabled(true);
        assert!(sync
            .handle_scroll(PaneId::Compare, offset(0.0, 75.0))
            .is_some());
    }

    #[test]
    fn zoom_steps_shared_scale_only_while_enabled() {
        let mut sync = SyncCoordinator::new(true);
        let observed = sync.shared_scale();

        sync.zoom(ZoomDirection::In);
        assert_abs_diff_eq!(observed.get().value(), 1.2);

        sync.set_enabled(false);
        sync.zoom(ZoomDirection::In);
        assert_abs_diff_eq!(observed.get().value(), 1.2);
    }
}
