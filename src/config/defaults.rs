// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: pan/zoom scale bounds and step factor
//! - **Calibration**: pixel-to-time conversion for measurements
//! - **Pane**: fixed dimensions of the comparison panes
//! - **Report**: page geometry for the exported PDF

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Default viewport scale when opening an image (1.0 = original size).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Minimum allowed viewport scale.
pub const MIN_SCALE: f32 = 0.5;

/// Maximum allowed viewport scale.
pub const MAX_SCALE: f32 = 4.0;

/// Multiplicative step applied per zoom in/out operation.
pub const ZOOM_STEP_FACTOR: f32 = 1.2;

// ==========================================================================
// Calibration Defaults
// ==========================================================================

/// Default pixel-to-time calibration in milliseconds per pixel.
///
/// Assumes roughly 1 px ~ 0.1 mm of trace paper and 1 mm ~ 40 ms.
/// True calibration would map device pixels to the signal's physical
/// time axis via its sampling rate; this constant is a deliberate
/// simplification and is user-configurable.
pub const DEFAULT_CALIBRATION_MS_PER_PX: f32 = 4.0;

/// Minimum accepted calibration value.
pub const MIN_CALIBRATION_MS_PER_PX: f32 = 0.01;

/// Maximum accepted calibration value.
pub const MAX_CALIBRATION_MS_PER_PX: f32 = 1000.0;

// ==========================================================================
// Pane Defaults
// ==========================================================================

/// Width of the scrollable content box inside each pane, in pixels.
pub const PANE_CONTENT_WIDTH: f32 = 960.0;

/// Height of the scrollable content box inside each pane, in pixels.
pub const PANE_CONTENT_HEIGHT: f32 = 720.0;

/// Pixel width of the rasterized pane snapshot embedded in reports.
pub const SNAPSHOT_WIDTH_PX: u32 = 960;

/// Pixel height of the rasterized pane snapshot embedded in reports.
pub const SNAPSHOT_HEIGHT_PX: u32 = 720;

// ==========================================================================
// Report Page Defaults (A4 portrait, millimetres)
// ==========================================================================

/// Report page width.
pub const REPORT_PAGE_WIDTH_MM: f32 = 210.0;

/// Report page height.
pub const REPORT_PAGE_HEIGHT_MM: f32 = 297.0;

/// Width of the word-wrapped notes column on the second page.
pub const REPORT_CONTENT_WIDTH_MM: f32 = 180.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < DEFAULT_SCALE);
    assert!(MAX_SCALE > DEFAULT_SCALE);
    assert!(ZOOM_STEP_FACTOR > 1.0);

    // Calibration validation
    assert!(MIN_CALIBRATION_MS_PER_PX > 0.0);
    assert!(MAX_CALIBRATION_MS_PER_PX > MIN_CALIBRATION_MS_PER_PX);
    assert!(DEFAULT_CALIBRATION_MS_PER_PX >= MIN_CALIBRATION_MS_PER_PX);
    assert!(DEFAULT_CALIBRATION_MS_PER_PX <= MAX_CALIBRATION_MS_PER_PX);

    // Pane validation
    assert!(PANE_CONTENT_WIDTH > 0.0);
    assert!(PANE_CONTENT_HEIGHT > 0.0);
    assert!(SNAPSHOT_WIDTH_PX > 0);
    assert!(SNAPSHOT_HEIGHT_PX > 0);

    // Report validation
    assert!(REPORT_CONTENT_WIDTH_MM < REPORT_PAGE_WIDTH_MM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_defaults_are_valid() {
        assert_eq!(DEFAULT_SCALE, 1.0);
        assert_eq!(MIN_SCALE, 0.5);
        assert_eq!(MAX_SCALE, 4.0);
    }

    #[test]
    fn zoom_step_factor_is_twenty_percent() {
        assert!((ZOOM_STEP_FACTOR - 1.2).abs() < f32::EPSILON);
    }

    #[test]
    fn calibration_defaults_are_valid() {
        assert_eq!(DEFAULT_CALIBRATION_MS_PER_PX, 4.0);
        assert!(DEFAULT_CALIBRATION_MS_PER_PX >= MIN_CALIBRATION_MS_PER_PX);
        assert!(DEFAULT_CALIBRATION_MS_PER_PX <= MAX_CALIBRATION_MS_PER_PX);
    }

    #[test]
    fn report_page_is_a4_portrait() {
        assert_eq!(REPORT_PAGE_WIDTH_MM, 210.0);
        assert_eq!(REPORT_PAGE_HEIGHT_MM, 297.0);
    }
}
