// SPDX-License-Identifier: MPL-2.0
//! Orbit pose of the camera around the model.
//!
//! Yaw is left unbounded so auto-rotation grows monotonically; pitch is
//! clamped so the camera never flips over the poles.

use crate::config::{MAX_ORBIT_PITCH, ORBIT_DRAG_SENSITIVITY};
use iced::{Point, Vector};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitPose {
    yaw: f32,
    pitch: f32,
}

impl OrbitPose {
    /// Pose the camera starts from and returns to on reset.
    pub const INITIAL: Self = Self {
        yaw: 0.0,
        pitch: 0.0,
    };

    #[must_use]
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(-MAX_ORBIT_PITCH, MAX_ORBIT_PITCH),
        }
    }

    #[must_use]
    pub fn yaw(self) -> f32 {
        self.yaw
    }

    #[must_use]
    pub fn pitch(self) -> f32 {
        self.pitch
    }

    #[must_use]
    pub fn rotated(self, delta_yaw: f32, delta_pitch: f32) -> Self {
        Self::new(self.yaw + delta_yaw, self.pitch + delta_pitch)
    }

    /// Applies a cursor movement in logical pixels.
    #[must_use]
    pub fn dragged(self, delta: Vector) -> Self {
        self.rotated(
            delta.x * ORBIT_DRAG_SENSITIVITY,
            delta.y * ORBIT_DRAG_SENSITIVITY,
        )
    }
}

/// Tracks the last cursor position of an orbit drag.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbitDrag {
    last_position: Option<Point>,
}

impl OrbitDrag {
    pub fn start(&mut self, position: Point) {
        self.last_position = Some(position);
    }

    pub fn stop(&mut self) {
        self.last_position = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_position.is_some()
    }

    /// Returns the movement since the previous call, or `None` when idle.
    pub fn move_to(&mut self, position: Point) -> Option<Vector> {
        let last = self.last_position.replace(position)?;
        Some(position - last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn pitch_is_clamped_to_a_third_of_pi() {
        let pose = OrbitPose::INITIAL.rotated(0.0, 10.0);
        assert_abs_diff_eq!(pose.pitch(), MAX_ORBIT_PITCH, epsilon = F32_EPSILON);

        let pose = OrbitPose::INITIAL.rotated(0.0, -10.0);
        assert_abs_diff_eq!(pose.pitch(), -MAX_ORBIT_PITCH, epsilon = F32_EPSILON);
    }

    #[test]
    fn yaw_is_not_wrapped() {
        let pose = OrbitPose::INITIAL.rotated(10.0, 0.0);
        assert_abs_diff_eq!(pose.yaw(), 10.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn drag_scales_pixels_by_sensitivity() {
        let pose = OrbitPose::INITIAL.dragged(Vector::new(100.0, -20.0));
        assert_abs_diff_eq!(pose.yaw(), 100.0 * ORBIT_DRAG_SENSITIVITY, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(pose.pitch(), -20.0 * ORBIT_DRAG_SENSITIVITY, epsilon = F32_EPSILON);
    }

    #[test]
    fn drag_reports_incremental_movement() {
        let mut drag = OrbitDrag::default();
        assert!(drag.move_to(Point::new(5.0, 5.0)).is_none());

        drag.start(Point::new(10.0, 10.0));
        assert!(drag.is_dragging());
        assert_eq!(drag.move_to(Point::new(15.0, 8.0)), Some(Vector::new(5.0, -2.0)));
        assert_eq!(drag.move_to(Point::new(16.0, 8.0)), Some(Vector::new(1.0, 0.0)));

        drag.stop();
        assert!(!drag.is_dragging());
    }
}
