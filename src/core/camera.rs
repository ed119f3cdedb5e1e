use super::constants::{
    CAMERA_BASE_DISTANCE, CAMERA_EASE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR,
    POINTER_ORIENTATION_SCALE, SCROLL_DEPTH_RANGE,
};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Perspective camera that sits on the +Z axis and turns in place.
///
/// `orientation` is (pitch, yaw) in radians; `depth` is the eye distance
/// from the origin along +Z.
#[derive(Clone, Debug)]
pub struct Camera {
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    pub orientation: Vec2,
    pub depth: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            aspect: sanitize_aspect(aspect),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
            orientation: Vec2::ZERO,
            depth: CAMERA_BASE_DISTANCE,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.depth)
    }

    /// Inverse of the camera's world transform (translate, then pitch/yaw).
    pub fn view_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.orientation.x, self.orientation.y, 0.0);
        Mat4::from_rotation_translation(rotation, self.eye()).inverse()
    }

    /// Orientation the camera is easing toward for a normalized pointer.
    #[inline]
    pub fn target_orientation(pointer: Vec2) -> Vec2 {
        Vec2::new(pointer.y, pointer.x) * POINTER_ORIENTATION_SCALE
    }

    /// Move a fixed fraction of the remaining distance toward `target`.
    #[inline]
    pub fn ease_toward(&mut self, target: Vec2) {
        self.orientation += (target - self.orientation) * CAMERA_EASE;
    }

    #[inline]
    pub fn depth_for_scroll(scroll_fraction: f32) -> f32 {
        CAMERA_BASE_DISTANCE + scroll_fraction.clamp(0.0, 1.0) * SCROLL_DEPTH_RANGE
    }
}

#[inline]
fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
