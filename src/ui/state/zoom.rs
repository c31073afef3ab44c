// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! The zoom factor scales the displayed model. It always stays within
//! `[MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR]` and moves by [`ZOOM_STEP`]; stepping
//! past a bound clamps.

pub use crate::config::{DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, ZOOM_STEP};

/// Model scale factor, guaranteed to be within the valid range (0.5–3.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_FACTOR
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_FACTOR
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + ZOOM_STEP)
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - ZOOM_STEP)
    }

    /// Zoom as a rounded percentage for display (1.2 → 120).
    #[must_use]
    pub fn percent(self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // value is within [50, 300] after scaling
        let percent = (self.0 * 100.0).round() as u32;
        percent
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

/// Zoom state of one viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomState {
    pub factor: ZoomFactor,
}

impl ZoomState {
    pub fn zoom_in(&mut self) {
        self.factor = self.factor.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.factor = self.factor.zoom_out();
    }

    /// Restores the default factor.
    pub fn reset(&mut self) {
        self.factor = ZoomFactor::default();
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.factor.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn factor_is_clamped_on_construction() {
        assert_eq!(ZoomFactor::new(10.0).value(), MAX_ZOOM_FACTOR);
        assert_eq!(ZoomFactor::new(0.0).value(), MIN_ZOOM_FACTOR);
        assert_eq!(ZoomFactor::new(f32::NAN), ZoomFactor::default());
    }

    #[test]
    fn zoom_in_adds_one_step() {
        let mut state = ZoomState::default();
        state.zoom_in();
        assert_abs_diff_eq!(state.value(), 1.2, epsilon = F32_EPSILON);
    }

    #[test]
    fn three_zoom_outs_from_default_reach_minimum() {
        let mut state = ZoomState::default();
        for _ in 0..3 {
            state.zoom_out();
        }
        assert_eq!(state.value(), MIN_ZOOM_FACTOR);
        assert!(state.factor.is_min());
    }

    #[test]
    fn repeated_zoom_in_saturates_at_maximum() {
        let mut state = ZoomState::default();
        for _ in 0..25 {
            state.zoom_in();
        }
        assert_eq!(state.value(), MAX_ZOOM_FACTOR);
        assert!(state.factor.is_max());
    }

    #[test]
    fn reset_restores_default() {
        let mut state = ZoomState::default();
        state.zoom_in();
        state.zoom_in();
        state.reset();
        assert_eq!(state.value(), DEFAULT_ZOOM_FACTOR);
    }

    #[test]
    fn percent_rounds_for_display() {
        let mut factor = ZoomFactor::default();
        factor = factor.zoom_in();
        assert_eq!(factor.percent(), 120);
    }

    #[test]
    fn settings_file_cannot_change_the_step() {
        let config: crate::config::Config = toml::from_str("[viewer]\nzoom_step = 0.7\n")
            .expect("unknown keys are ignored");
        let mut viewer = crate::ui::viewer::State::new(
            crate::content::AssetRef::new("builtin:cube"),
            crate::ui::viewer::ViewerOptions::default(),
            &config.viewer,
        );
        viewer.handle(crate::ui::viewer::Message::ZoomIn);
        assert_abs_diff_eq!(viewer.zoom().value(), 1.0 + ZOOM_STEP, epsilon = F32_EPSILON);
    }
}
