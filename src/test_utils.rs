// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! Re-exports the `approx` crate's assertion macros, which properly handle
//! floating-point precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;
