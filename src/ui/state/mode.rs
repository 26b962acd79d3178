// SPDX-License-Identifier: MPL-2.0
//! Interaction mode for the base pane.
//!
//! A single two-state enum consumed by one pointer-dispatch function, so
//! the measurement/annotation mutual exclusion is checkable in one place
//! instead of being scattered across conditionals.

/// What a pointer press on the base pane means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Clicks drop point annotations; drags pan the image.
    #[default]
    Annotate,
    /// Drags measure temporal distances; annotation is suppressed.
    Measure,
}

impl InteractionMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            InteractionMode::Annotate => InteractionMode::Measure,
            InteractionMode::Measure => InteractionMode::Annotate,
        }
    }

    #[must_use]
    pub fn is_measure(self) -> bool {
        matches!(self, InteractionMode::Measure)
    }
}
