// SPDX-License-Identifier: MPL-2.0
//! PDF assembly for the comparison report.
//!
//! Page one carries the title, the two pane snapshots side by side, and the
//! measurement summary. Page two carries the word-wrapped collaborative
//! notes. The report always lands in the user's download directory under a
//! fixed name, overwriting the previous export.

use crate::config::{REPORT_CONTENT_WIDTH_MM, REPORT_PAGE_HEIGHT_MM, REPORT_PAGE_WIDTH_MM};
use crate::error::{Error, Result};
use crate::report::{text, RenderToImage, ReportRequest};
use crate::ui::state::PaneId;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Fixed name of the exported report.
pub const REPORT_FILE_NAME: &str = "ecg-comparison-report.pdf";

const MARGIN_MM: f32 = 10.0;
const SNAPSHOT_TOP_MM: f32 = 20.0;
const SNAPSHOT_WIDTH_MM: f32 = 80.0;
const SNAPSHOT_HEIGHT_MM: f32 = 60.0;
const SUMMARY_TOP_MM: f32 = 90.0;
const SUMMARY_LINE_STEP_MM: f32 = 7.0;
const NOTES_LINE_STEP_MM: f32 = 6.0;
const PAGE_BOTTOM_MM: f32 = 280.0;
const SNAPSHOT_DPI: f32 = 300.0;

const TITLE_PT: f32 = 18.0;
const HEADING_PT: f32 = 14.0;
const SUBHEADING_PT: f32 = 12.0;
const BODY_PT: f32 = 11.0;

/// Approximate character budget of one wrapped notes line at `BODY_PT`.
const NOTES_WRAP_CHARS: usize = (REPORT_CONTENT_WIDTH_MM / 1.95) as usize;

/// Writes comparison reports as two-page PDFs.
pub struct ReportExporter {
    output_dir: PathBuf,
}

impl ReportExporter {
    /// Exporter targeting the user's download directory, falling back to
    /// the current directory when the platform does not define one.
    #[must_use]
    pub fn new() -> Self {
        let output_dir = dirs::download_dir()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        Self { output_dir }
    }

    /// Exporter targeting an explicit directory.
    #[must_use]
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Assembles and writes the report. Returns the path of the written
    /// file. Panes the rasterizer cannot resolve are marked unavailable;
    /// the rest of the report is exported regardless.
    pub fn export(
        &self,
        request: &ReportRequest,
        rasterizer: &impl RenderToImage,
    ) -> Result<PathBuf> {
        let (doc, page, layer) = PdfDocument::new(
            "ECG Comparison Report",
            Mm(REPORT_PAGE_WIDTH_MM),
            Mm(REPORT_PAGE_HEIGHT_MM),
            "Page 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|error| Error::Report(error.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|error| Error::Report(error.to_string()))?;

        let layer = doc.get_page(page).get_layer(layer);
        layer.use_text(
            "ECG Comparison Report",
            TITLE_PT,
            Mm(MARGIN_MM),
            y_top(MARGIN_MM),
            &font_bold,
        );
        layer.use_text(
            chrono::Local::now().format("Exported %Y-%m-%d %H:%M").to_string(),
            BODY_PT,
            Mm(REPORT_PAGE_WIDTH_MM - 60.0),
            y_top(MARGIN_MM),
            &font,
        );

        self.place_snapshot(
            &layer,
            &font,
            rasterizer,
            PaneId::Base,
            "Patient ECG",
            15.0,
        );
        self.place_snapshot(
            &layer,
            &font,
            rasterizer,
            PaneId::Compare,
            "Similar Case",
            105.0,
        );

        layer.use_text(
            "Measurement Summary:",
            SUBHEADING_PT,
            Mm(MARGIN_MM),
            y_top(SUMMARY_TOP_MM),
            &font_bold,
        );
        if request.measurements.is_empty() {
            layer.use_text(
                "No measurements recorded.",
                BODY_PT,
                Mm(MARGIN_MM),
                y_top(SUMMARY_TOP_MM + SUMMARY_LINE_STEP_MM),
                &font,
            );
        } else {
            // The full ordered list is exported; long lists continue on
            // fresh pages.
            let mut summary_layer = layer.clone();
            let mut y = SUMMARY_TOP_MM + SUMMARY_LINE_STEP_MM;
            for (index, record) in request.measurements.iter().enumerate() {
                if y > PAGE_BOTTOM_MM {
                    let (next_page, next_layer) = doc.add_page(
                        Mm(REPORT_PAGE_WIDTH_MM),
                        Mm(REPORT_PAGE_HEIGHT_MM),
                        "Measurements",
                    );
                    summary_layer = doc.get_page(next_page).get_layer(next_layer);
                    y = MARGIN_MM + 10.0;
                }
                summary_layer.use_text(
                    text::measurement_line(index, record),
                    BODY_PT,
                    Mm(MARGIN_MM),
                    y_top(y),
                    &font,
                );
                y += SUMMARY_LINE_STEP_MM;
            }
        }

        self.write_notes(&doc, &font, &font_bold, &request.notes);

        let path = self.output_dir.join(REPORT_FILE_NAME);
        let file = File::create(&path)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|error| Error::Report(error.to_string()))?;

        log::info!("report written to {}", path.display());
        Ok(path)
    }

    fn place_snapshot(
        &self,
        layer: &PdfLayerReference,
        font: &IndirectFontRef,
        rasterizer: &impl RenderToImage,
        pane: PaneId,
        caption: &str,
        left_mm: f32,
    ) {
        layer.use_text(
            caption,
            BODY_PT,
            Mm(left_mm),
            y_top(SNAPSHOT_TOP_MM - 2.0),
            font,
        );

        match rasterizer.render_to_image(pane) {
            Some(snapshot) => {
                // Scale from the image's native print size at the embed dpi
                // to the fixed slot.
                let native_width_mm = snapshot.width() as f32 * 25.4 / SNAPSHOT_DPI;
                let native_height_mm = snapshot.height() as f32 * 25.4 / SNAPSHOT_DPI;

                let image = Image::from_dynamic_image(&snapshot);
                image.add_to_layer(
                    layer.clone(),
                    ImageTransform {
                        translate_x: Some(Mm(left_mm)),
                        translate_y: Some(y_top(SNAPSHOT_TOP_MM + SNAPSHOT_HEIGHT_MM)),
                        scale_x: Some(SNAPSHOT_WIDTH_MM / native_width_mm),
                        scale_y: Some(SNAPSHOT_HEIGHT_MM / native_height_mm),
                        dpi: Some(SNAPSHOT_DPI),
                        ..ImageTransform::default()
                    },
                );
            }
            None => {
                layer.use_text(
                    "Pane unavailable",
                    BODY_PT,
                    Mm(left_mm + 20.0),
                    y_top(SNAPSHOT_TOP_MM + SNAPSHOT_HEIGHT_MM / 2.0),
                    font,
                );
            }
        }
    }

    fn write_notes(
        &self,
        doc: &PdfDocumentReference,
        font: &IndirectFontRef,
        font_bold: &IndirectFontRef,
        notes: &str,
    ) {
        let (page, layer) = doc.add_page(
            Mm(REPORT_PAGE_WIDTH_MM),
            Mm(REPORT_PAGE_HEIGHT_MM),
            "Notes",
        );
        let mut layer = doc.get_page(page).get_layer(layer);

        layer.use_text(
            "Collaborative Notes:",
            HEADING_PT,
            Mm(MARGIN_MM),
            y_top(MARGIN_MM),
            font_bold,
        );

        let body = if notes.trim().is_empty() {
            "(none)".to_string()
        } else {
            notes.to_string()
        };

        let mut y = MARGIN_MM + 10.0;
        for line in text::wrap(&body, NOTES_WRAP_CHARS) {
            if y > PAGE_BOTTOM_MM {
                let (next_page, next_layer) = doc.add_page(
                    Mm(REPORT_PAGE_WIDTH_MM),
                    Mm(REPORT_PAGE_HEIGHT_MM),
                    "Notes",
                );
                layer = doc.get_page(next_page).get_layer(next_layer);
                y = MARGIN_MM + 10.0;
            }
            if !line.is_empty() {
                layer.use_text(line, BODY_PT, Mm(MARGIN_MM), y_top(y), font);
            }
            y += NOTES_LINE_STEP_MM;
        }
    }
}

impl Default for ReportExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a top-based y position (mm from the page's top edge) into the
/// PDF's bottom-left coordinate system.
fn y_top(from_top_mm: f32) -> Mm {
    Mm(REPORT_PAGE_HEIGHT_MM - from_top_mm)
}
