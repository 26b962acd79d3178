// SPDX-License-Identifier: MPL-2.0
//! Append-only point annotations for a pane.
//!
//! Coordinates are pane-local pixels, captured at click time; they do not
//! re-project when the image underneath is panned or zoomed.

use iced::Point;

/// Default label for a freshly placed annotation.
pub const DEFAULT_ANNOTATION_TEXT: &str = "Annotation";

/// A user-created point note in pane-local pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Ordered, append-only store of annotations. No edit or delete.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    entries: Vec<Annotation>,
}

impl AnnotationStore {
    /// Appends an annotation at the given pane-local position.
    pub fn add_at(&mut self, position: Point) {
        self.entries.push(Annotation {
            x: position.x,
            y: position.y,
            text: DEFAULT_ANNOTATION_TEXT.to_string(),
        });
        log::debug!(
            "annotation #{} placed at ({:.0}, {:.0})",
            self.entries.len(),
            position.x,
            position.y
        );
    }

    /// All annotations, in placement order.
    #[must_use]
    pub fn entries(&self) -> &[Annotation] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
