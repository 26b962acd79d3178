// SPDX-License-Identifier: MPL-2.0
//! Dual-pane comparison: coordinator state, toolbar, and explanation panel.

pub mod component;
pub mod panel;
pub mod toolbar;

pub use component::{Effect, Message, State};
