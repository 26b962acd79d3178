// SPDX-License-Identifier: MPL-2.0
//! Offline pane snapshots for the report.
//!
//! The export does not read pixels back from the GPU surface; it re-draws
//! each pane from the same sources the screen uses: the scan image, the
//! marker layout, and for the base pane the measurement segments and
//! annotation points. Snapshots are rendered at the pane's content size so
//! pane pixel coordinates map 1:1.

use crate::config::{SNAPSHOT_HEIGHT_PX, SNAPSHOT_WIDTH_PX};
use crate::domain::Marker;
use crate::report::RenderToImage;
use crate::ui::state::{Annotation, PaneId, Segment};
use crate::ui::viewer::markers;
use iced::Size;
use image_rs::{DynamicImage, Rgb, RgbImage};
use std::path::PathBuf;

const MARKER_BORDER_PX: u32 = 2;
const SEGMENT_COLOR: Rgb<u8> = Rgb([239, 68, 68]);
const ANNOTATION_COLOR: Rgb<u8> = Rgb([220, 38, 38]);
const ANNOTATION_DOT_RADIUS: i32 = 3;

/// Everything needed to re-draw one pane offline.
#[derive(Debug, Clone)]
pub struct PaneSource {
    pub image_path: Option<PathBuf>,
    pub markers: Vec<Marker>,
    pub segments: Vec<Segment>,
    pub annotations: Vec<Annotation>,
}

/// Re-draws both panes from their sources.
#[derive(Debug, Clone)]
pub struct CompositeRasterizer {
    base: PaneSource,
    compare: PaneSource,
}

impl CompositeRasterizer {
    #[must_use]
    pub fn new(base: PaneSource, compare: PaneSource) -> Self {
        Self { base, compare }
    }

    fn source(&self, pane: PaneId) -> &PaneSource {
        match pane {
            PaneId::Base => &self.base,
            PaneId::Compare => &self.compare,
        }
    }
}

impl RenderToImage for CompositeRasterizer {
    fn render_to_image(&self, pane: PaneId) -> Option<DynamicImage> {
        let source = self.source(pane);
        let path = source.image_path.as_ref()?;

        let scan = match image_rs::open(path) {
            Ok(scan) => scan,
            Err(error) => {
                log::warn!("snapshot skipped for {}: {error}", path.display());
                return None;
            }
        };

        let mut canvas = scan
            .resize_exact(
                SNAPSHOT_WIDTH_PX,
                SNAPSHOT_HEIGHT_PX,
                image_rs::imageops::FilterType::Triangle,
            )
            .into_rgb8();

        let snapshot_size = Size::new(SNAPSHOT_WIDTH_PX as f32, SNAPSHOT_HEIGHT_PX as f32);
        for marker_box in markers::layout(&source.markers, snapshot_size) {
            draw_rect_border(
                &mut canvas,
                marker_box.bounds.x as i32,
                marker_box.bounds.y as i32,
                marker_box.bounds.width as i32,
                marker_box.bounds.height as i32,
                to_rgb(marker_box.color),
            );
        }

        for segment in &source.segments {
            let end_x = segment.start.x + segment.angle.cos() * segment.length;
            let end_y = segment.start.y + segment.angle.sin() * segment.length;
            draw_line(
                &mut canvas,
                segment.start.x as i32,
                segment.start.y as i32,
                end_x as i32,
                end_y as i32,
                SEGMENT_COLOR,
            );
        }

        for annotation in &source.annotations {
            draw_dot(
                &mut canvas,
                annotation.x as i32,
                annotation.y as i32,
                ANNOTATION_DOT_RADIUS,
                ANNOTATION_COLOR,
            );
        }

        Some(DynamicImage::ImageRgb8(canvas))
    }
}

fn to_rgb(color: iced::Color) -> Rgb<u8> {
    Rgb([
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
    ])
}

fn put_pixel_checked(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line between two points, clipped to the canvas.
fn draw_line(canvas: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        put_pixel_checked(canvas, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn draw_rect_border(canvas: &mut RgbImage, x: i32, y: i32, width: i32, height: i32, color: Rgb<u8>) {
    for t in 0..MARKER_BORDER_PX as i32 {
        draw_line(canvas, x, y + t, x + width, y + t, color);
        draw_line(canvas, x, y + height - t, x + width, y + height - t, color);
        draw_line(canvas, x + t, y, x + t, y + height, color);
        draw_line(canvas, x + width - t, y, x + width - t, y + height, color);
    }
}

fn draw_dot(canvas: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put_pixel_checked(canvas, cx + dx, cy + dy, color);
            }
        }
    }
}
