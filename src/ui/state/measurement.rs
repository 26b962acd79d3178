// SPDX-License-Identifier: MPL-2.0
//! Click-drag distance measurement with calibration.
//!
//! The engine is a two-state machine (`Idle` → `Dragging` → `Idle`) fed by
//! pointer events in pane-local pixel coordinates. A completed drag appends
//! an immutable `MeasurementRecord`; an incomplete one records nothing.
//! Coordinates are captured in pane pixel space and deliberately do not
//! track the image under later pan/zoom changes.

use iced::Point;

/// A calibrated straight-line distance between two user-selected points.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    pub start: Point,
    pub end: Point,
    /// Euclidean length of the segment in pane pixels.
    pub pixel_distance: f32,
    /// `pixel_distance` × calibration, in milliseconds.
    pub time_distance: f32,
}

impl MeasurementRecord {
    /// Render geometry for this record's segment.
    #[must_use]
    pub fn segment(&self) -> Segment {
        Segment::between(self.start, self.end, self.time_distance)
    }
}

/// Geometry for drawing one measurement as a rotated segment with a
/// midpoint label.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub length: f32,
    /// Rotation from the positive x axis, in radians.
    pub angle: f32,
    pub midpoint: Point,
    /// Midpoint label, e.g. `"400.0 ms"`.
    pub label: String,
}

impl Segment {
    fn between(start: Point, end: Point, time_distance: f32) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        Self {
            start,
            length: (dx * dx + dy * dy).sqrt(),
            angle: dy.atan2(dx),
            midpoint: Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0),
            label: format!("{:.1} ms", time_distance),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Dragging { start: Point, end: Option<Point> },
}

/// Measurement state machine and record list for the base pane.
#[derive(Debug, Clone)]
pub struct MeasurementEngine {
    phase: Phase,
    records: Vec<MeasurementRecord>,
    calibration_ms_per_px: f32,
}

impl MeasurementEngine {
    #[must_use]
    pub fn new(calibration_ms_per_px: f32) -> Self {
        Self {
            phase: Phase::Idle,
            records: Vec::new(),
            calibration_ms_per_px,
        }
    }

    /// Pointer down while measurement mode is active: start a drag.
    pub fn pointer_down(&mut self, position: Point) {
        self.phase = Phase::Dragging {
            start: position,
            end: None,
        };
    }

    /// Pointer move: track the provisional end point while dragging.
    pub fn pointer_move(&mut self, position: Point) {
        if let Phase::Dragging { end, .. } = &mut self.phase {
            *end = Some(position);
        }
    }

    /// Pointer up: complete the drag. Appends a record only when both
    /// endpoints are defined; a press-and-release without movement, or an
    /// up without a prior down, records nothing.
    pub fn pointer_up(&mut self) -> Option<&MeasurementRecord> {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        let Phase::Dragging {
            start,
            end: Some(end),
        } = phase
        else {
            return None;
        };

        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let pixel_distance = (dx * dx + dy * dy).sqrt();
        let time_distance = pixel_distance * self.calibration_ms_per_px;

        self.records.push(MeasurementRecord {
            start,
            end,
            pixel_distance,
            time_distance,
        });
        log::debug!(
            "measurement #{}: {:.1} px / {:.1} ms",
            self.records.len(),
            pixel_distance,
            time_distance
        );
        self.records.last()
    }

    /// Discards any in-progress drag without recording it (mode toggled
    /// mid-drag).
    pub fn abort(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Completed records, in creation order.
    #[must_use]
    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    /// Geometry for the in-progress drag, if both endpoints exist yet.
    #[must_use]
    pub fn preview(&self) -> Option<Segment> {
        let Phase::Dragging {
            start,
            end: Some(end),
        } = self.phase
        else {
            return None;
        };

        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let time = (dx * dx + dy * dy).sqrt() * self.calibration_ms_per_px;
        Some(Segment::between(start, end, time))
    }

    #[must_use]
    pub fn calibration(&self) -> f32 {
        self.calibration_ms_per_px
    }
}
