// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Zoom, orbit and clip-time values accumulate floating-point error across
//! repeated steps, so tests compare them with the `approx` macros.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Tolerance for f32 values that should be equal after a few arithmetic steps.
pub const F32_EPSILON: f32 = 1e-5;
