// SPDX-License-Identifier: MPL-2.0
//! `cardiolens` is a dual-pane clinical scan comparison viewer built with
//! the Iced GUI framework.
//!
//! It shows a patient's ECG next to a retrieved similar case with optional
//! scroll/zoom synchronization, calibrated click-drag distance measurement,
//! point annotations, diagnostic marker overlays, and PDF report export.

#![doc(html_root_url = "https://docs.rs/cardiolens/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
