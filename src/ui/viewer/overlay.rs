// SPDX-License-Identifier: MPL-2.0
//! Canvas overlay drawn above a pane's image.
//!
//! Draws the diagnostic marker boxes (which follow the image's pan/zoom
//! transform), the completed and in-progress measurement segments, and the
//! point annotations (both of which stay in pane pixel space, untouched by
//! the transform). The overlay also captures pointer input for the pane;
//! what a press means is decided by the comparison coordinator, not here.

use crate::domain::Marker;
use crate::ui::state::{Annotation, Segment, Transform};
use crate::ui::viewer::component::Message;
use crate::ui::viewer::markers;
use iced::widget::canvas;
use iced::{mouse, Color, Point, Rectangle, Size};

const MARKER_STROKE_WIDTH: f32 = 2.0;
const SEGMENT_STROKE_WIDTH: f32 = 2.0;
const LABEL_FONT_SIZE: f32 = 12.0;
/// Rough per-character width for the label backing plate.
const LABEL_CHAR_WIDTH: f32 = 7.0;

const SEGMENT_COLOR: Color = Color::from_rgb(0.94, 0.27, 0.27);
const ANNOTATION_COLOR: Color = Color::from_rgb(0.86, 0.15, 0.15);
const LABEL_PLATE_COLOR: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.9,
};

/// Per-pane overlay renderer and pointer-event source.
#[derive(Debug)]
pub struct OverlayCanvas<'a> {
    pub markers: &'a [Marker],
    /// Current image transform; markers are drawn through it.
    pub transform: Transform,
    /// Completed measurement segments (base pane only).
    pub segments: Vec<Segment>,
    /// In-progress measurement preview, drawn semi-transparent.
    pub preview: Option<Segment>,
    /// Point annotations (base pane only).
    pub annotations: &'a [Annotation],
}

impl<'a> OverlayCanvas<'a> {
    fn draw_marker_boxes(&self, frame: &mut canvas::Frame, bounds: Rectangle) {
        let scale = self.transform.scale;
        for marker_box in markers::layout(self.markers, bounds.size()) {
            let origin = self
                .transform
                .apply(Point::new(marker_box.bounds.x, marker_box.bounds.y));
            let size = Size::new(
                marker_box.bounds.width * scale,
                marker_box.bounds.height * scale,
            );

            let path = canvas::Path::rectangle(origin, size);
            frame.stroke(
                &path,
                canvas::Stroke::default()
                    .with_width(MARKER_STROKE_WIDTH)
                    .with_color(marker_box.color),
            );

            self.draw_label(
                frame,
                &marker_box.label,
                Point::new(origin.x + 2.0, origin.y + 2.0),
                Color::BLACK,
            );
        }
    }

    fn draw_segment(&self, frame: &mut canvas::Frame, segment: &Segment, alpha: f32) {
        let end = Point::new(
            segment.start.x + segment.angle.cos() * segment.length,
            segment.start.y + segment.angle.sin() * segment.length,
        );
        let path = canvas::Path::line(segment.start, end);
        let color = Color {
            a: alpha,
            ..SEGMENT_COLOR
        };
        frame.stroke(
            &path,
            canvas::Stroke::default()
                .with_width(SEGMENT_STROKE_WIDTH)
                .with_color(color),
        );

        self.draw_label(
            frame,
            &segment.label,
            Point::new(
                segment.midpoint.x - segment.label.len() as f32 * LABEL_CHAR_WIDTH / 2.0,
                segment.midpoint.y - LABEL_FONT_SIZE / 2.0,
            ),
            Color::BLACK,
        );
    }

    /// A small white plate behind the text keeps labels readable over the
    /// trace.
    fn draw_label(&self, frame: &mut canvas::Frame, label: &str, position: Point, color: Color) {
        let plate = canvas::Path::rectangle(
            Point::new(position.x - 2.0, position.y - 1.0),
            Size::new(
                label.len() as f32 * LABEL_CHAR_WIDTH + 4.0,
                LABEL_FONT_SIZE + 4.0,
            ),
        );
        frame.fill(&plate, LABEL_PLATE_COLOR);
        frame.fill_text(canvas::Text {
            content: label.to_string(),
            position,
            color,
            size: LABEL_FONT_SIZE.into(),
            ..canvas::Text::default()
        });
    }
}

impl<'a> canvas::Program<Message> for OverlayCanvas<'a> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(Action::publish(Message::PointerPressed(position)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let position = cursor.position_in(bounds)?;
                Some(Action::publish(Message::PointerMoved(position)))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Action::publish(Message::PointerReleased).and_capture())
            }
            // Leaving the canvas mid-gesture behaves like a release, so a
            // drag cannot stay stuck active.
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(Action::publish(Message::PointerReleased))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        self.draw_marker_boxes(&mut frame, bounds);

        for segment in &self.segments {
            self.draw_segment(&mut frame, segment, 1.0);
        }
        if let Some(preview) = &self.preview {
            self.draw_segment(&mut frame, preview, 0.5);
        }

        for annotation in self.annotations {
            self.draw_label(
                &mut frame,
                &annotation.text,
                Point::new(annotation.x, annotation.y),
                ANNOTATION_COLOR,
            );
        }

        vec![frame.into_geometry()]
    }
}
