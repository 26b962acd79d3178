// SPDX-License-Identifier: MPL-2.0
//! PDF report export: page assembly, pane snapshot rasterization, and text
//! layout helpers.

mod exporter;
mod raster;
mod text;

pub use exporter::{ReportExporter, REPORT_FILE_NAME};
pub use raster::{CompositeRasterizer, PaneSource};
pub use text::{measurement_line, wrap};

use crate::ui::state::{MeasurementRecord, PaneId};

/// Everything the export captures at the moment the user asks for it.
/// Later edits to measurements or notes do not affect an export in flight.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub measurements: Vec<MeasurementRecord>,
    pub notes: String,
}

/// Source of pane snapshots for the report. Abstracted so tests can swap in
/// a deterministic rasterizer.
pub trait RenderToImage {
    /// Rasterizes one pane, or `None` when the pane cannot be resolved;
    /// the export continues with the remaining content.
    fn render_to_image(&self, pane: PaneId) -> Option<image_rs::DynamicImage>;
}
