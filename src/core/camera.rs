use super::constants::*;
use glam::{Mat4, Vec2, Vec3};

/// Perspective camera looking down -Z from inside the rig.
#[derive(Clone, Debug)]
pub struct Camera {
    /// Position relative to the rig.
    pub local: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            local: Vec3::new(0.0, 0.0, CAMERA_Z),
            aspect,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// View matrix for a camera parented to a rig at `rig_offset`.
    pub fn view_matrix(&self, rig_offset: Vec2) -> Mat4 {
        let eye = self.world_position(rig_offset);
        Mat4::look_to_rh(eye, Vec3::NEG_Z, Vec3::Y)
    }

    #[inline]
    pub fn world_position(&self, rig_offset: Vec2) -> Vec3 {
        self.local + rig_offset.extend(0.0)
    }
}

/// Camera height for a scroll offset: one viewport height maps to one section.
#[inline]
pub fn camera_y_for_scroll(scroll_y: f64, viewport_height: u32, spacing: f32) -> f32 {
    let h = viewport_height.max(1) as f64;
    (-(scroll_y / h) * spacing as f64) as f32
}

/// Parallax goal for a cursor offset. Y is flipped so moving the pointer down
/// lifts the scene content.
#[inline]
pub fn parallax_target(cursor: Vec2) -> Vec2 {
    Vec2::new(
        cursor.x * PARALLAX_AMPLITUDE,
        -cursor.y * PARALLAX_AMPLITUDE,
    )
}

/// Group holding the camera; its offset chases the parallax target.
#[derive(Clone, Debug, Default)]
pub struct CameraRig {
    pub offset: Vec2,
}

impl CameraRig {
    /// Exponential smoothing toward `target`. The step fraction is
    /// `PARALLAX_EASING_PER_SEC * dt` and is not clamped, so it only
    /// converges while that product stays below 1.
    pub fn step_toward(&mut self, target: Vec2, dt_sec: f32) {
        let k = PARALLAX_EASING_PER_SEC * dt_sec;
        self.offset += (target - self.offset) * k;
    }
}
