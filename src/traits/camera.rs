use glam::{Quat, Vec3};

/// Axis in the camera's local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalAxis {
    X,
    Y,
    Z,
}

impl LocalAxis {
    pub fn unit(self) -> Vec3 {
        match self {
            LocalAxis::X => Vec3::X,
            LocalAxis::Y => Vec3::Y,
            LocalAxis::Z => Vec3::Z,
        }
    }
}

/// Camera handle driven by a controller
pub trait CameraRig {
    /// World-space position
    fn position(&self) -> Vec3;

    /// World-space orientation
    fn orientation(&self) -> Quat;

    /// Move by a signed distance along one of the camera's local axes
    fn translate_on_axis(&mut self, axis: LocalAxis, distance: f32);

    /// Reorient so `target` sits at the center of the view
    fn look_at(&mut self, target: Vec3);

    /// Unit vector the camera is facing (local -Z in world space)
    fn world_direction(&self) -> Vec3 {
        (self.orientation() * Vec3::NEG_Z).normalize_or_zero()
    }
}
