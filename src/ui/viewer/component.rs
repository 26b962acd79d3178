// SPDX-License-Identifier: MPL-2.0
//! State and message handling for a single scan pane.
//!
//! Each pane owns its image, its marker list, and its pan/zoom viewport.
//! Pointer messages arrive pre-routed by the comparison coordinator; this
//! component only ever interprets them as panning.

use crate::domain::Marker;
use crate::error::Result;
use crate::ui::state::{PaneId, SharedScale, ViewportController, ZoomDirection};
use iced::widget::image::Handle;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Point;
use std::path::{Path, PathBuf};

/// Messages a pane can emit.
#[derive(Debug, Clone)]
pub enum Message {
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    ZoomIn,
    ZoomOut,
    ResetView,
    Scrolled(AbsoluteOffset),
}

/// Side effects the pane asks its parent to carry out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// The user scrolled this pane; the parent may mirror it.
    Scrolled(AbsoluteOffset),
}

/// One scan pane: image, markers, and viewport.
#[derive(Debug, Clone)]
pub struct State {
    id: PaneId,
    title: String,
    viewport: ViewportController,
    markers: Vec<Marker>,
    image_path: Option<PathBuf>,
    image_handle: Option<Handle>,
    scroll_offset: AbsoluteOffset,
}

impl State {
    #[must_use]
    pub fn new(id: PaneId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            viewport: ViewportController::default(),
            markers: Vec::new(),
            image_path: None,
            image_handle: None,
            scroll_offset: AbsoluteOffset::default(),
        }
    }

    /// Loads the pane's image from disk. Fails early so a bad path surfaces
    /// at startup instead of as a blank pane.
    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        // Decoding validates the file; display itself uses the handle.
        image_rs::open(path)?;
        self.image_handle = Some(Handle::from_path(path));
        self.image_path = Some(path.to_path_buf());
        log::info!("{}: loaded {}", self.id.scrollable_id(), path.display());
        Ok(())
    }

    pub fn set_markers(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::PointerPressed(position) => {
                self.viewport.begin_drag(position);
                Effect::None
            }
            Message::PointerMoved(position) => {
                self.viewport.update_drag(position);
                Effect::None
            }
            Message::PointerReleased => {
                self.viewport.end_drag();
                Effect::None
            }
            Message::ZoomIn => {
                self.viewport.zoom(ZoomDirection::In);
                Effect::None
            }
            Message::ZoomOut => {
                self.viewport.zoom(ZoomDirection::Out);
                Effect::None
            }
            Message::ResetView => {
                self.viewport.reset();
                Effect::None
            }
            Message::Scrolled(offset) => {
                self.scroll_offset = offset;
                Effect::Scrolled(offset)
            }
        }
    }

    #[must_use]
    pub fn id(&self) -> PaneId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn image_handle(&self) -> Option<&Handle> {
        self.image_handle.as_ref()
    }

    #[must_use]
    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    #[must_use]
    pub fn scroll_offset(&self) -> AbsoluteOffset {
        self.scroll_offset
    }

    pub fn attach_shared_scale(&mut self, shared: SharedScale) {
        self.viewport.attach_shared_scale(shared);
    }

    pub fn detach_shared_scale(&mut self) {
        self.viewport.detach_shared_scale();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn pane() -> State {
        State::new(PaneId::Base, "Patient ECG")
    }

    #[test]
    fn pointer_messages_drive_panning() {
        let mut pane = pane();
        pane.handle(Message::PointerPressed(Point::new(50.0, 50.0)));
        pane.handle(Message::PointerMoved(Point::new(70.0, 40.0)));
        pane.handle(Message::PointerReleased);

        assert_abs_diff_eq!(pane.viewport().offset().x, 20.0);
        assert_abs_diff_eq!(pane.viewport().offset().y, -10.0);
        assert!(!pane.viewport().is_dragging());
    }

    #[test]
    fn scrolled_message_is_surfaced_as_effect() {
        let mut pane = pane();
        let offset = AbsoluteOffset { x: 0.0, y: 42.0 };

        let effect = pane.handle(Message::Scrolled(offset));
        assert_eq!(effect, Effect::Scrolled(offset));
        assert_abs_diff_eq!(pane.scroll_offset().y, 42.0);
    }

    #[test]
    fn zoom_messages_step_the_local_scale() {
        let mut pane = pane();
        pane.handle(Message::ZoomIn);
        assert_abs_diff_eq!(pane.viewport().scale().value(), 1.2);

        pane.handle(Message::ResetView);
        assert_abs_diff_eq!(pane.viewport().scale().value(), 1.0);
    }

    #[test]
    fn zoom_messages_are_inert_while_synced() {
        let mut pane = pane();
        pane.attach_shared_scale(SharedScale::new());

        pane.handle(Message::ZoomIn);
        assert_abs_diff_eq!(pane.viewport().scale().value(), 1.0);
    }

    #[test]
    fn loading_a_missing_image_fails() {
        let mut pane = pane();
        assert!(pane.load_image(Path::new("/nonexistent/scan.png")).is_err());
        assert!(pane.image_handle().is_none());
    }
}
