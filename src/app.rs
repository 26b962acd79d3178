// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the comparison screen.
//!
//! The `App` struct owns the comparison coordinator and translates its
//! effects into tasks: scroll mirroring writes to the sibling scrollable,
//! exports run on the async executor, and citation clicks open the system
//! browser. Startup wiring (config, flags, case loading) lives here so the
//! user-facing behavior is easy to audit in one place.

use crate::config::{self, Config};
use crate::domain::CaseFile;
use crate::report::ReportExporter;
use crate::ui::comparison;
use iced::widget::{operation, Column, Container, Id, Text};
use iced::{window, Element, Length, Task, Theme};
use std::path::PathBuf;

const WINDOW_DEFAULT_WIDTH: f32 = 1480.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 920.0;
const MIN_WINDOW_WIDTH: f32 = 1000.0;
const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// Startup parameters resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub base_image: Option<PathBuf>,
    pub compare_image: Option<PathBuf>,
    pub case_file: Option<PathBuf>,
    /// Calibration override in milliseconds per pixel.
    pub calibration: Option<f32>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Comparison(comparison::Message),
    ExportFinished(Result<PathBuf, String>),
}

/// Root Iced application state.
pub struct App {
    comparison: comparison::State,
    status: Option<String>,
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // The boot closure must be `Fn`, but the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            log::warn!("falling back to default config: {error}");
            Config::default()
        });

        let calibration = flags
            .calibration
            .map(|value| {
                value.clamp(
                    config::MIN_CALIBRATION_MS_PER_PX,
                    config::MAX_CALIBRATION_MS_PER_PX,
                )
            })
            .unwrap_or_else(|| config.calibration());
        let sync_enabled = config.sync_enabled.unwrap_or(true);

        let mut comparison = comparison::State::new(calibration, sync_enabled);
        let mut status = None;

        if let Some(path) = &flags.base_image {
            if let Err(error) = comparison.load_base_image(path) {
                log::error!("base image: {error}");
                status = Some(format!("Failed to load base image: {error}"));
            }
        }
        if let Some(path) = &flags.compare_image {
            if let Err(error) = comparison.load_compare_image(path) {
                log::error!("compare image: {error}");
                status = Some(format!("Failed to load compare image: {error}"));
            }
        }
        if let Some(path) = &flags.case_file {
            match CaseFile::load(path) {
                Ok(case) => comparison.load_case(case),
                Err(error) => {
                    log::error!("case file: {error}");
                    status = Some(format!("Failed to load case file: {error}"));
                }
            }
        }

        (Self { comparison, status }, Task::none())
    }

    fn title(&self) -> String {
        config::APP_NAME.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Comparison(message) => {
                if let comparison::Message::SetSync(enabled) = &message {
                    self.persist_sync_preference(*enabled);
                }
                match self.comparison.handle(message) {
                    comparison::Effect::None => Task::none(),
                    comparison::Effect::MirrorScroll(mirror) => {
                        operation::scroll_to(Id::new(mirror.target.scrollable_id()), mirror.offset)
                    }
                    comparison::Effect::Export(request) => {
                        let exporter = ReportExporter::new();
                        let rasterizer = self.comparison.rasterizer();
                        self.status = Some("Exporting report...".to_string());
                        Task::perform(
                            async move {
                                // Rasterization and PDF encoding are blocking;
                                // keep them off the runtime threads.
                                tokio::task::spawn_blocking(move || {
                                    exporter
                                        .export(&request, &rasterizer)
                                        .map_err(|error| error.to_string())
                                })
                                .await
                                .map_err(|join| join.to_string())?
                            },
                            Message::ExportFinished,
                        )
                    }
                    comparison::Effect::OpenUrl(url) => {
                        if let Err(error) = open::that(&url) {
                            log::warn!("could not open {url}: {error}");
                        }
                        Task::none()
                    }
                }
            }
            Message::ExportFinished(result) => {
                self.status = Some(match result {
                    Ok(path) => format!("Report saved to {}", path.display()),
                    Err(error) => format!("Export failed: {error}"),
                });
                Task::none()
            }
        }
    }

    /// Persists the sync checkbox so the next session starts the same way.
    fn persist_sync_preference(&self, enabled: bool) {
        let mut config = config::load().unwrap_or_default();
        config.sync_enabled = Some(enabled);
        if let Err(error) = config::save(&config) {
            log::warn!("could not persist sync preference: {error}");
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut column = Column::new()
            .spacing(8)
            .push(comparison::component::view(&self.comparison).map(Message::Comparison));

        if let Some(status) = &self.status {
            column = column.push(Text::new(status.clone()).size(13));
        }

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(12)
            .into()
    }
}
