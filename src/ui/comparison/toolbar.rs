// SPDX-License-Identifier: MPL-2.0
//! Toolbar above the pane pair: measurement mode toggle, PDF export, sync
//! checkbox, and the shared zoom controls shown while sync is on.

use crate::ui::comparison::component::Message;
use crate::ui::state::{InteractionMode, ZoomDirection};
use iced::widget::{button, checkbox, Row, Text};
use iced::{Element, Length};

pub struct ViewModel {
    pub mode: InteractionMode,
    pub sync_enabled: bool,
    pub shared_scale_percent: i32,
}

pub fn view<'a>(model: ViewModel) -> Element<'a, Message> {
    let measure_label = if model.mode.is_measure() {
        "Measurement Tool (Active)"
    } else {
        "Measurement Tool"
    };

    let mut row = Row::new()
        .spacing(8)
        .align_y(iced::Alignment::Center)
        .push(button(Text::new(measure_label)).on_press(Message::ToggleMeasurementMode))
        .push(button(Text::new("Export PDF")).on_press(Message::ExportRequested))
        .push(
            checkbox(model.sync_enabled)
                .label("Sync Scrolling")
                .on_toggle(Message::SetSync),
        );

    if model.sync_enabled {
        row = row
            .push(Text::new("Zoom Both:"))
            .push(button(Text::new("−")).on_press(Message::SharedZoom(ZoomDirection::Out)))
            .push(Text::new(format!("{}%", model.shared_scale_percent)))
            .push(button(Text::new("+")).on_press(Message::SharedZoom(ZoomDirection::In)));
    }

    row.width(Length::Fill).into()
}
