// SPDX-License-Identifier: MPL-2.0
//! UI layer: headless interaction state, the single-pane viewer, and the
//! dual-pane comparison screen.

pub mod comparison;
pub mod state;
pub mod viewer;
