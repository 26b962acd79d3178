// SPDX-License-Identifier: MPL-2.0
//! Pure layout of diagnostic marker boxes over a pane.
//!
//! Markers arrive in percentage-of-image coordinates and are positioned
//! against the pane's content box: `left = x%`, `top = y%`, `width` and
//! `height` likewise. The layout is a pure function of the marker list and
//! the box size; the pan/zoom transform is applied separately at draw
//! time, so the percentages themselves never depend on the viewport.

use crate::domain::{Marker, MarkerKind};
use iced::{Color, Point, Rectangle, Size};

/// A positioned, colored, labeled marker box in pane coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerBox {
    pub bounds: Rectangle,
    pub color: Color,
    pub label: String,
}

/// Border color for a marker kind, matching the dashboard palette.
#[must_use]
pub fn color_for(kind: MarkerKind) -> Color {
    match kind {
        MarkerKind::StElevation => Color::from_rgba8(255, 82, 82, 0.8),
        MarkerKind::QWave => Color::from_rgba8(255, 177, 66, 0.8),
        MarkerKind::Arrhythmia => Color::from_rgba8(76, 175, 80, 0.8),
    }
}

/// Lays out the markers against a content box of the given size.
#[must_use]
pub fn layout(markers: &[Marker], box_size: Size) -> Vec<MarkerBox> {
    markers
        .iter()
        .map(|marker| MarkerBox {
            bounds: Rectangle::new(
                Point::new(
                    marker.x / 100.0 * box_size.width,
                    marker.y / 100.0 * box_size.height,
                ),
                Size::new(
                    marker.width / 100.0 * box_size.width,
                    marker.height / 100.0 * box_size.height,
                ),
            ),
            color: color_for(marker.kind),
            label: marker.label.clone(),
        })
        .collect()
}
