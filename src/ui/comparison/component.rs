// SPDX-License-Identifier: MPL-2.0
//! Coordinator for the dual-pane comparison screen.
//!
//! Owns the two panes, the interaction mode, the measurement engine, the
//! annotation store, the notes buffer, and the sync coordinator. Pointer
//! input from the base pane passes through a single mode dispatch, so a
//! press is interpreted exactly once per mode.

use crate::domain::{AnalysisOutcome, CaseFile, Diagnosis, SimilarEcg};
use crate::error::Result;
use crate::report::{CompositeRasterizer, PaneSource, ReportRequest};
use crate::ui::state::{
    AnnotationStore, InteractionMode, MeasurementEngine, PaneId, ScrollMirror, SyncCoordinator,
    ZoomDirection,
};
use crate::ui::viewer::{component as pane_component, pane};
use iced::widget::{text_editor, Column, Row, Text};
use iced::{Element, Length, Point};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum Message {
    Pane(PaneId, pane_component::Message),
    ToggleMeasurementMode,
    SetSync(bool),
    SharedZoom(ZoomDirection),
    NotesEdited(text_editor::Action),
    ExportRequested,
    OpenCitation(String),
}

/// Side effects the coordinator asks the application shell to carry out.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Write the given scroll offset to the sibling pane's scrollable.
    MirrorScroll(ScrollMirror),
    /// Run the PDF export with this captured snapshot.
    Export(ReportRequest),
    /// Open a citation URL in the system browser.
    OpenUrl(String),
}

/// Movement past this distance turns a press into a pan, not a click.
const CLICK_DRAG_TOLERANCE: f32 = 3.0;

/// A base-pane press that may still become an annotation click.
#[derive(Debug, Clone, Copy)]
struct PendingClick {
    pressed: Point,
    current: Point,
}

pub struct State {
    mode: InteractionMode,
    sync: SyncCoordinator,
    engine: MeasurementEngine,
    annotations: AnnotationStore,
    pending_click: Option<PendingClick>,
    notes: text_editor::Content,
    base: pane_component::State,
    compare: pane_component::State,
    diagnosis: Option<Diagnosis>,
    similar: Option<SimilarEcg>,
    outcome: Option<AnalysisOutcome>,
}

impl State {
    #[must_use]
    pub fn new(calibration_ms_per_px: f32, sync_enabled: bool) -> Self {
        let sync = SyncCoordinator::new(sync_enabled);
        let mut base = pane_component::State::new(PaneId::Base, "Patient ECG");
        let mut compare = pane_component::State::new(PaneId::Compare, "Similar Case");
        if sync_enabled {
            base.attach_shared_scale(sync.shared_scale());
            compare.attach_shared_scale(sync.shared_scale());
        }

        Self {
            mode: InteractionMode::default(),
            sync,
            engine: MeasurementEngine::new(calibration_ms_per_px),
            annotations: AnnotationStore::default(),
            pending_click: None,
            notes: text_editor::Content::new(),
            base,
            compare,
            diagnosis: None,
            similar: None,
            outcome: None,
        }
    }

    /// Loads the base pane scan from disk.
    pub fn load_base_image(&mut self, path: &Path) -> Result<()> {
        self.base.load_image(path)
    }

    /// Loads the compare pane scan from disk.
    pub fn load_compare_image(&mut self, path: &Path) -> Result<()> {
        self.compare.load_image(path)
    }

    /// Installs a case file: diagnosis markers land on the base pane, the
    /// similar case's markers on the compare pane.
    pub fn load_case(&mut self, case: CaseFile) {
        self.base.set_markers(case.diagnosis.markers.clone());
        if let Some(similar) = &case.similar {
            self.compare.set_markers(similar.diagnosis.markers.clone());
        }
        self.diagnosis = Some(case.diagnosis);
        self.similar = case.similar;
        self.outcome = case.outcome;
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Pane(id, pane_message) => self.handle_pane(id, pane_message),
            Message::ToggleMeasurementMode => {
                if self.mode.is_measure() {
                    // Leaving measure mode mid-drag discards the pending
                    // measurement.
                    self.engine.abort();
                } else {
                    self.pending_click = None;
                    self.base.handle(pane_component::Message::PointerReleased);
                }
                self.mode = self.mode.toggled();
                Effect::None
            }
            Message::SetSync(enabled) => {
                self.sync.set_enabled(enabled);
                if enabled {
                    self.base.attach_shared_scale(self.sync.shared_scale());
                    self.compare.attach_shared_scale(self.sync.shared_scale());
                } else {
                    self.base.detach_shared_scale();
                    self.compare.detach_shared_scale();
                }
                Effect::None
            }
            Message::SharedZoom(direction) => {
                self.sync.zoom(direction);
                Effect::None
            }
            Message::NotesEdited(action) => {
                self.notes.perform(action);
                Effect::None
            }
            Message::ExportRequested => Effect::Export(self.report_request()),
            Message::OpenCitation(url) => Effect::OpenUrl(url),
        }
    }

    /// Routes a pane message. Base-pane pointer input goes through the mode
    /// dispatch; everything else is the pane's own business, except scrolls,
    /// which the sync coordinator may mirror.
    fn handle_pane(&mut self, id: PaneId, message: pane_component::Message) -> Effect {
        match message {
            pane_component::Message::PointerPressed(position) if id == PaneId::Base => {
                self.dispatch_pointer_press(position)
            }
            pane_component::Message::PointerMoved(position) if id == PaneId::Base => {
                if self.mode.is_measure() {
                    self.engine.pointer_move(position);
                    return Effect::None;
                }
                if let Some(pending) = self.pending_click {
                    self.pending_click = (position.distance(pending.pressed)
                        <= CLICK_DRAG_TOLERANCE)
                        .then_some(PendingClick {
                            pressed: pending.pressed,
                            current: position,
                        });
                }
                self.base
                    .handle(pane_component::Message::PointerMoved(position));
                Effect::None
            }
            pane_component::Message::PointerReleased if id == PaneId::Base => {
                if self.mode.is_measure() {
                    self.engine.pointer_up();
                    return Effect::None;
                }
                // A press that never became a pan is a click; it drops an
                // annotation where the pointer came up.
                if let Some(pending) = self.pending_click.take() {
                    self.annotations.add_at(pending.current);
                }
                self.base.handle(pane_component::Message::PointerReleased);
                Effect::None
            }
            other => {
                let effect = self.pane_mut(id).handle(other);
                match effect {
                    pane_component::Effect::Scrolled(offset) => self
                        .sync
                        .handle_scroll(id, offset)
                        .map_or(Effect::None, Effect::MirrorScroll),
                    pane_component::Effect::None => Effect::None,
                }
            }
        }
    }

    /// The single place a base-pane press is given a meaning.
    fn dispatch_pointer_press(&mut self, position: Point) -> Effect {
        match self.mode {
            InteractionMode::Measure => {
                self.engine.pointer_down(position);
            }
            InteractionMode::Annotate => {
                // The press starts a pan; whether it was also a click is
                // decided on release.
                self.pending_click = Some(PendingClick {
                    pressed: position,
                    current: position,
                });
                self.base
                    .handle(pane_component::Message::PointerPressed(position));
            }
        }
        Effect::None
    }

    fn pane_mut(&mut self, id: PaneId) -> &mut pane_component::State {
        match id {
            PaneId::Base => &mut self.base,
            PaneId::Compare => &mut self.compare,
        }
    }

    /// Captures the current measurements and notes for an export.
    #[must_use]
    pub fn report_request(&self) -> ReportRequest {
        ReportRequest {
            measurements: self.engine.records().to_vec(),
            notes: self.notes.text(),
        }
    }

    /// Builds the snapshot rasterizer from the current pane contents.
    #[must_use]
    pub fn rasterizer(&self) -> CompositeRasterizer {
        CompositeRasterizer::new(
            PaneSource {
                image_path: self.base.image_path().map(Path::to_path_buf),
                markers: self.base.markers().to_vec(),
                segments: self.engine.records().iter().map(|r| r.segment()).collect(),
                annotations: self.annotations.entries().to_vec(),
            },
            PaneSource {
                image_path: self.compare.image_path().map(Path::to_path_buf),
                markers: self.compare.markers().to_vec(),
                segments: Vec::new(),
                annotations: Vec::new(),
            },
        )
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn sync(&self) -> &SyncCoordinator {
        &self.sync
    }

    #[must_use]
    pub fn engine(&self) -> &MeasurementEngine {
        &self.engine
    }

    #[must_use]
    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    #[must_use]
    pub fn pane(&self, id: PaneId) -> &pane_component::State {
        match id {
            PaneId::Base => &self.base,
            PaneId::Compare => &self.compare,
        }
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let base_view = pane::view(pane::ViewModel {
        state: &state.base,
        segments: state.engine.records().iter().map(|r| r.segment()).collect(),
        preview: state.engine.preview(),
        annotations: state.annotations.entries(),
        measure_active: state.mode.is_measure(),
    })
    .map(|message| Message::Pane(PaneId::Base, message));

    let compare_view = pane::view(pane::ViewModel {
        state: &state.compare,
        segments: Vec::new(),
        preview: None,
        annotations: &[],
        measure_active: false,
    })
    .map(|message| Message::Pane(PaneId::Compare, message));

    let panes = Row::new().spacing(12).push(base_view).push(compare_view);

    let notes = Column::new()
        .spacing(4)
        .push(Text::new("Collaborative Notes"))
        .push(
            text_editor(&state.notes)
                .placeholder("Add notes for the report...")
                .on_action(Message::NotesEdited)
                .height(Length::Fixed(120.0)),
        );

    Column::new()
        .spacing(12)
        .push(toolbar_view(state))
        .push(panes)
        .push(notes)
        .push(panel_view(state))
        .into()
}

fn toolbar_view(state: &State) -> Element<'_, Message> {
    super::toolbar::view(super::toolbar::ViewModel {
        mode: state.mode,
        sync_enabled: state.sync.is_enabled(),
        shared_scale_percent: state.sync.shared_scale().get().as_percent(),
    })
}

fn panel_view(state: &State) -> Element<'_, Message> {
    super::panel::view(
        state.diagnosis.as_ref(),
        state.similar.as_ref(),
        state.outcome.as_ref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::widget::scrollable::AbsoluteOffset;

    fn coordinator() -> State {
        State::new(4.0, true)
    }

    fn scrolled(y: f32) -> pane_component::Message {
        pane_component::Message::Scrolled(AbsoluteOffset { x: 0.0, y })
    }

    #[test]
    fn base_scroll_is_mirrored_to_compare() {
        let mut state = coordinator();
        let effect = state.handle(Message::Pane(PaneId::Base, scrolled(150.0)));

        let Effect::MirrorScroll(mirror) = effect else {
            panic!("expected mirror effect");
        };
        assert_eq!(mirror.target, PaneId::Compare);
        assert_abs_diff_eq!(mirror.offset.y, 150.0);
    }

    #[test]
    fn compare_scroll_after_a_mirror_is_still_forwarded() {
        let mut state = coordinator();
        state.handle(Message::Pane(PaneId::Base, scrolled(100.0)));

        let effect = state.handle(Message::Pane(PaneId::Compare, scrolled(300.0)));
        let Effect::MirrorScroll(mirror) = effect else {
            panic!("expected mirror effect");
        };
        assert_eq!(mirror.target, PaneId::Base);
        assert_abs_diff_eq!(mirror.offset.y, 300.0);
    }

    #[test]
    fn scroll_is_private_when_sync_disabled() {
        let mut state = coordinator();
        state.handle(Message::SetSync(false));

        let effect = state.handle(Message::Pane(PaneId::Base, scrolled(80.0)));
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn measure_drag_on_base_pane_records_measurement() {
        let mut state = coordinator();
        state.handle(Message::ToggleMeasurementMode);

        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerPressed(Point::new(10.0, 10.0)),
        ));
        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerMoved(Point::new(10.0, 110.0)),
        ));
        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerReleased,
        ));

        let records = state.engine().records();
        assert_eq!(records.len(), 1);
        assert_abs_diff_eq!(records[0].time_distance, 400.0);
        // Measuring must not pan the base pane.
        assert_abs_diff_eq!(state.pane(PaneId::Base).viewport().offset().x, 0.0);
    }

    #[test]
    fn click_without_movement_adds_annotation_on_release() {
        let mut state = coordinator();

        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerPressed(Point::new(30.0, 40.0)),
        ));
        // No annotation yet; the press might still become a pan.
        assert!(state.annotations().is_empty());
        assert!(state.pane(PaneId::Base).viewport().is_dragging());

        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerReleased,
        ));

        assert_eq!(state.annotations().len(), 1);
        assert_abs_diff_eq!(state.annotations().entries()[0].x, 30.0);
        assert_abs_diff_eq!(state.annotations().entries()[0].y, 40.0);
    }

    #[test]
    fn pan_drag_does_not_deposit_an_annotation() {
        let mut state = coordinator();

        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerPressed(Point::new(30.0, 40.0)),
        ));
        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerMoved(Point::new(80.0, 40.0)),
        ));
        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerReleased,
        ));

        assert!(state.annotations().is_empty());
        assert_abs_diff_eq!(state.pane(PaneId::Base).viewport().offset().x, 50.0);
    }

    #[test]
    fn toggling_mode_mid_drag_discards_measurement() {
        let mut state = coordinator();
        state.handle(Message::ToggleMeasurementMode);

        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerPressed(Point::new(0.0, 0.0)),
        ));
        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerMoved(Point::new(40.0, 0.0)),
        ));
        state.handle(Message::ToggleMeasurementMode);

        assert!(state.engine().records().is_empty());
        assert!(!state.engine().is_dragging());
        assert!(!state.mode().is_measure());
    }

    #[test]
    fn shared_zoom_reaches_both_panes_while_synced() {
        let mut state = coordinator();
        state.handle(Message::SharedZoom(ZoomDirection::In));

        assert_abs_diff_eq!(
            state.pane(PaneId::Base).viewport().scale().value(),
            1.2
        );
        assert_abs_diff_eq!(
            state.pane(PaneId::Compare).viewport().scale().value(),
            1.2
        );
    }

    #[test]
    fn pane_zoom_becomes_independent_after_unsync() {
        let mut state = coordinator();
        state.handle(Message::SetSync(false));

        state.handle(Message::Pane(PaneId::Base, pane_component::Message::ZoomIn));

        assert_abs_diff_eq!(state.pane(PaneId::Base).viewport().scale().value(), 1.2);
        assert_abs_diff_eq!(
            state.pane(PaneId::Compare).viewport().scale().value(),
            1.0
        );
    }

    #[test]
    fn export_captures_measurements_and_notes() {
        let mut state = coordinator();
        state.handle(Message::ToggleMeasurementMode);
        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerPressed(Point::new(0.0, 0.0)),
        ));
        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerMoved(Point::new(0.0, 50.0)),
        ));
        state.handle(Message::Pane(
            PaneId::Base,
            pane_component::Message::PointerReleased,
        ));

        let Effect::Export(request) = state.handle(Message::ExportRequested) else {
            panic!("expected export effect");
        };
        assert_eq!(request.measurements.len(), 1);
        assert_abs_diff_eq!(request.measurements[0].time_distance, 200.0);
    }

    #[test]
    fn citation_click_surfaces_open_url_effect() {
        let mut state = coordinator();
        let effect = state.handle(Message::OpenCitation("https://example.org/ref".into()));
        let Effect::OpenUrl(url) = effect else {
            panic!("expected open url effect");
        };
        assert_eq!(url, "https://example.org/ref");
    }
}
