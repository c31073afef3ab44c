// SPDX-License-Identifier: MPL-2.0
//! Orbit camera and perspective projection.

use crate::config::DEFAULT_AUTO_ROTATE_SPEED;
use crate::ui::state::OrbitPose;
use glam::{Mat4, Vec3, Vec4Swizzles};
use iced::{Point, Size, Vector};

/// Vertical field of view of every viewer.
const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
/// Distance from the eye to the model origin, in normalized model units.
const EYE_DISTANCE: f32 = 3.5;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pose: OrbitPose,
    auto_rotate: bool,
    rotate_speed: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(false, DEFAULT_AUTO_ROTATE_SPEED)
    }
}

impl Camera {
    #[must_use]
    pub fn new(auto_rotate: bool, rotate_speed: f32) -> Self {
        Self {
            pose: OrbitPose::INITIAL,
            auto_rotate,
            rotate_speed,
        }
    }

    #[must_use]
    pub fn pose(&self) -> OrbitPose {
        self.pose
    }

    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    pub fn reset(&mut self) {
        self.pose = OrbitPose::INITIAL;
    }

    /// Rotates the model by a cursor drag, in logical pixels.
    pub fn orbit(&mut self, delta: Vector) {
        self.pose = self.pose.dragged(delta);
    }

    /// Applies auto-rotation for `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        if self.auto_rotate && delta > 0.0 {
            self.pose = self.pose.rotated(self.rotate_speed * delta, 0.0);
        }
    }

    /// Model matrix: zoom scale, then yaw, then pitch.
    #[must_use]
    pub fn model_matrix(&self, zoom: f32) -> Mat4 {
        Mat4::from_rotation_x(self.pose.pitch())
            * Mat4::from_rotation_y(self.pose.yaw())
            * Mat4::from_scale(Vec3::splat(zoom))
    }

    #[must_use]
    pub fn view_projection(aspect_ratio: f32) -> Mat4 {
        let aspect_ratio = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            aspect_ratio
        } else {
            1.0
        };
        let projection = Mat4::perspective_rh(FOV_Y, aspect_ratio, Z_NEAR, Z_FAR);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, EYE_DISTANCE), Vec3::ZERO, Vec3::Y);
        projection * view
    }
}

/// Projects a point through `mvp` into canvas coordinates.
///
/// Returns `None` for points behind the eye.
#[must_use]
pub fn project(mvp: &Mat4, point: Vec3, size: Size) -> Option<Point> {
    let clip = *mvp * point.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.xyz() / clip.w;
    Some(Point::new(
        (ndc.x + 1.0) * 0.5 * size.width,
        (1.0 - ndc.y) * 0.5 * size.height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn origin_projects_to_canvas_center() {
        let mvp = Camera::view_projection(2.0);
        let point = project(&mvp, Vec3::ZERO, Size::new(200.0, 100.0)).expect("visible");
        assert_abs_diff_eq!(point.x, 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(point.y, 50.0, epsilon = 1e-3);
    }

    #[test]
    fn points_behind_the_eye_are_culled() {
        let mvp = Camera::view_projection(1.0);
        assert!(project(&mvp, Vec3::new(0.0, 0.0, 10.0), Size::new(100.0, 100.0)).is_none());
    }

    #[test]
    fn up_is_toward_the_top_of_the_canvas() {
        let mvp = Camera::view_projection(1.0);
        let point = project(&mvp, Vec3::Y, Size::new(100.0, 100.0)).expect("visible");
        assert!(point.y < 50.0);
    }

    #[test]
    fn auto_rotate_advances_yaw_at_configured_speed() {
        let mut camera = Camera::new(true, 0.5);
        camera.advance(2.0);
        assert_abs_diff_eq!(camera.pose().yaw(), 1.0, epsilon = F32_EPSILON);
        assert_eq!(camera.pose().pitch(), 0.0);
    }

    #[test]
    fn disabled_auto_rotate_keeps_pose() {
        let mut camera = Camera::new(false, 0.5);
        camera.advance(2.0);
        assert_eq!(camera.pose(), OrbitPose::INITIAL);
    }

    #[test]
    fn reset_returns_to_initial_pose() {
        let mut camera = Camera::new(true, 0.5);
        camera.orbit(Vector::new(40.0, 30.0));
        camera.advance(1.0);
        camera.reset();
        assert_eq!(camera.pose(), OrbitPose::INITIAL);
        assert!(camera.auto_rotate());
    }

    #[test]
    fn zoom_scales_model() {
        let camera = Camera::default();
        let scaled = camera.model_matrix(2.0).transform_point3(Vec3::X);
        assert_abs_diff_eq!(scaled.x, 2.0, epsilon = F32_EPSILON);
    }
}
