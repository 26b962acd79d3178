// SPDX-License-Identifier: MPL-2.0
//! View for one scan pane: header with zoom controls, scrollable content
//! box, and the overlay canvas stacked above the image.

use crate::config::{PANE_CONTENT_HEIGHT, PANE_CONTENT_WIDTH};
use crate::ui::state::{Annotation, Segment};
use crate::ui::viewer::component::{Message, State};
use crate::ui::viewer::overlay::OverlayCanvas;
use iced::mouse;
use iced::widget::canvas::Canvas;
use iced::widget::{button, mouse_area, Column, Container, Image, Row, Scrollable, Stack, Text};
use iced::{
    widget::scrollable::{Direction, Scrollbar, Viewport},
    widget::Id,
    Element, Length, Padding,
};

/// Height of the visible pane viewport; content scrolls within it.
const PANE_VIEWPORT_HEIGHT: f32 = 420.0;

pub struct ViewModel<'a> {
    pub state: &'a State,
    /// Completed measurement segments to draw (base pane only).
    pub segments: Vec<Segment>,
    /// In-progress measurement preview (base pane only).
    pub preview: Option<Segment>,
    /// Point annotations to draw (base pane only).
    pub annotations: &'a [Annotation],
    /// Whether the measurement tool is armed for this pane.
    pub measure_active: bool,
}

pub fn view<'a>(model: ViewModel<'a>) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(4)
        .push(header(model.state))
        .push(content(&model));

    Container::new(column).width(Length::Fill).into()
}

fn header(state: &State) -> Element<'_, Message> {
    let scale = state.viewport().scale();

    let row = Row::new()
        .spacing(8)
        .align_y(iced::Alignment::Center)
        .push(Text::new(state.title().to_string()).width(Length::Fill))
        .push(button(Text::new("−")).on_press(Message::ZoomOut))
        .push(Text::new(format!("{}%", scale.as_percent())))
        .push(button(Text::new("+")).on_press(Message::ZoomIn))
        .push(button(Text::new("Reset")).on_press(Message::ResetView));

    Container::new(row).width(Length::Fill).padding(4).into()
}

fn content<'a>(model: &ViewModel<'a>) -> Element<'a, Message> {
    let state = model.state;
    let transform = state.viewport().transform();

    let image_layer: Element<'a, Message> = match state.image_handle() {
        Some(handle) => {
            let scaled = Image::new(handle.clone())
                .width(Length::Fixed(PANE_CONTENT_WIDTH * transform.scale))
                .height(Length::Fixed(PANE_CONTENT_HEIGHT * transform.scale))
                .content_fit(iced::ContentFit::Contain);

            // Negative offsets cannot be expressed as padding; the state
            // keeps the exact value, the display clamps at the pane edge.
            Container::new(scaled)
                .padding(Padding {
                    top: transform.offset_y.max(0.0),
                    left: transform.offset_x.max(0.0),
                    right: 0.0,
                    bottom: 0.0,
                })
                .into()
        }
        None => Container::new(Text::new("No scan loaded"))
            .center_x(Length::Fixed(PANE_CONTENT_WIDTH))
            .center_y(Length::Fixed(PANE_CONTENT_HEIGHT))
            .into(),
    };

    let overlay = Canvas::new(OverlayCanvas {
        markers: state.markers(),
        transform,
        segments: model.segments.clone(),
        preview: model.preview.clone(),
        annotations: model.annotations,
    })
    .width(Length::Fixed(PANE_CONTENT_WIDTH))
    .height(Length::Fixed(PANE_CONTENT_HEIGHT));

    let content_box = Container::new(Stack::new().push(image_layer).push(overlay))
        .width(Length::Fixed(PANE_CONTENT_WIDTH))
        .height(Length::Fixed(PANE_CONTENT_HEIGHT))
        .clip(true);

    let scrollable = Scrollable::new(content_box)
        .id(Id::new(state.id().scrollable_id()))
        .width(Length::Fill)
        .height(Length::Fixed(PANE_VIEWPORT_HEIGHT))
        .direction(Direction::Both {
            vertical: Scrollbar::new(),
            horizontal: Scrollbar::new(),
        })
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset()));

    let cursor_interaction = if model.measure_active {
        mouse::Interaction::Crosshair
    } else if state.viewport().is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(scrollable)
        .interaction(cursor_interaction)
        .into()
}
