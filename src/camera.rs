use glam::{Mat3, Quat, Vec3};

use crate::traits::{CameraRig, LocalAxis};

/// Camera pose looking down its local -Z axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub orientation: Quat,
    pub up: Vec3,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn local_up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Horizontal heading in degrees, 0 along -Z, increasing clockwise seen from above
    pub fn heading_degrees(&self) -> f32 {
        let f = self.forward();
        f.x.atan2(-f.z).to_degrees().rem_euclid(360.0)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl CameraRig for Camera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn translate_on_axis(&mut self, axis: LocalAxis, distance: f32) {
        self.position += self.orientation * axis.unit() * distance;
    }

    /// Keeps the current orientation when `target` is on top of the camera
    /// or straight along the up vector.
    fn look_at(&mut self, target: Vec3) {
        let Some(forward) = (target - self.position).try_normalize() else {
            return;
        };
        let Some(right) = forward.cross(self.up).try_normalize() else {
            return;
        };
        let up = right.cross(forward);
        self.orientation = Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize();
    }
}
