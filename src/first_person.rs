//! First-person controller: held keys become camera motion, and every
//! translation is gated by a ray probe against the scene.
//!
//! Per frame `update_view` translates first (each direction probed on its
//! own), then rotates toward a look target built from the `lat`/`theta`
//! angles. The orientation is always rebuilt through `look_at` rather than
//! by composing quaternions, so the up vector never drifts.

use glam::Vec3;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::KeyCode;
use winit::window::WindowId;

use crate::config::{ControllerConfig, RotationTiming};
use crate::core::controller::{Intent, MotionFlags};
use crate::core::input_adapter::KeyboardTracker;
use crate::core::raycaster::{Intersection, Raycaster};
use crate::math::spherical_direction;
use crate::traits::{CameraRig, CollidableProvider, LocalAxis};

/// Distance from the camera to the synthetic look target
pub const LOOK_DISTANCE: f32 = 100.0;
/// Pitch limit in degrees; keeps the look direction off the poles
pub const MAX_LATITUDE: f32 = 89.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    pub fn intent(self) -> Intent {
        match self {
            MoveDirection::Forward => Intent::MoveForward,
            MoveDirection::Backward => Intent::MoveBackward,
            MoveDirection::Left => Intent::MoveLeft,
            MoveDirection::Right => Intent::MoveRight,
        }
    }

    fn is_held(self, flags: &MotionFlags) -> bool {
        match self {
            MoveDirection::Forward => flags.forward,
            MoveDirection::Backward => flags.backward,
            MoveDirection::Left => flags.left,
            MoveDirection::Right => flags.right,
        }
    }

    /// Unit world-space direction of travel, or zero when undefined
    /// (strafing while looking straight along `world_up`).
    pub fn world_direction(self, facing: Vec3, world_up: Vec3) -> Vec3 {
        let direction = match self {
            MoveDirection::Forward => facing,
            MoveDirection::Backward => -facing,
            MoveDirection::Right => facing.cross(world_up),
            MoveDirection::Left => world_up.cross(facing),
        };
        direction.normalize_or_zero()
    }

    /// Local axis and signed distance for a move of `distance`
    pub fn local_step(self, distance: f32) -> (LocalAxis, f32) {
        match self {
            MoveDirection::Forward => (LocalAxis::Z, -distance),
            MoveDirection::Backward => (LocalAxis::Z, distance),
            MoveDirection::Left => (LocalAxis::X, -distance),
            MoveDirection::Right => (LocalAxis::X, distance),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FirstPersonController {
    pub config: ControllerConfig,
    keyboard: KeyboardTracker,
    /// Pitch in degrees, always within [-MAX_LATITUDE, MAX_LATITUDE]
    lat: f32,
    /// Yaw in radians, unbounded
    theta: f32,
    /// Polar angle in radians, derived from `lat`
    phi: f32,
    target: Vec3,
    blocked: Vec<MoveDirection>,
}

impl FirstPersonController {
    /// Controller listening to key events from every window
    pub fn new(config: ControllerConfig) -> Self {
        Self::with_keyboard(config, KeyboardTracker::new())
    }

    /// Controller listening to key events from `window` only
    pub fn bound_to(config: ControllerConfig, window: WindowId) -> Self {
        Self::with_keyboard(config, KeyboardTracker::bound_to(window))
    }

    fn with_keyboard(config: ControllerConfig, keyboard: KeyboardTracker) -> Self {
        Self {
            config,
            keyboard,
            lat: 0.0,
            theta: 0.0,
            phi: polar_angle(0.0),
            target: Vec3::ZERO,
            blocked: Vec::new(),
        }
    }

    /// Releases always reach the tracker so no flag outlives its key.
    /// Presses are dropped while disabled.
    pub fn handle_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) -> Option<Intent> {
        if !self.config.enabled && state.is_pressed() {
            return None;
        }
        self.keyboard.handle_key(code, state, repeat)
    }

    pub fn press(&mut self, code: KeyCode) -> Option<Intent> {
        self.handle_key(code, ElementState::Pressed, false)
    }

    pub fn release(&mut self, code: KeyCode) -> Option<Intent> {
        self.handle_key(code, ElementState::Released, false)
    }

    pub fn process_window_event(&mut self, window: WindowId, event: &WindowEvent) -> bool {
        if !self.config.enabled && !releases_input(event) {
            return false;
        }
        self.keyboard.process_event(window, event)
    }

    pub fn flags(&self) -> MotionFlags {
        self.keyboard.flags()
    }

    pub fn is_frozen(&self) -> bool {
        self.keyboard.is_frozen()
    }

    pub fn lat(&self) -> f32 {
        self.lat
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Look target from the most recent rotation step
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Moves skipped by the most recent `update_view`
    pub fn blocked_moves(&self) -> &[MoveDirection] {
        &self.blocked
    }

    /// Seeds the look angles so the next frame faces `point`
    pub fn look_at<C: CameraRig + ?Sized>(&mut self, camera: &C, point: Vec3) {
        let Some(direction) = (point - camera.position()).try_normalize() else {
            return;
        };
        let polar = direction.y.clamp(-1.0, 1.0).acos();
        self.lat = (90.0 - polar.to_degrees()).clamp(-MAX_LATITUDE, MAX_LATITUDE);
        self.phi = polar_angle(self.lat);
        if direction.x != 0.0 || direction.z != 0.0 {
            self.theta = direction.z.atan2(direction.x);
        }
    }

    /// Per-frame entry point: translate (collision gated), then rotate.
    /// Does nothing while disabled or frozen.
    pub fn update_view<C, P>(&mut self, camera: &mut C, world: &P, dt: f32)
    where
        C: CameraRig + ?Sized,
        P: CollidableProvider + ?Sized,
    {
        self.blocked.clear();
        if !self.config.enabled || self.keyboard.is_frozen() {
            return;
        }
        let dt = dt.max(0.0);
        self.translate(camera, world, dt);
        self.rotate(camera, dt);
    }

    fn translate<C, P>(&mut self, camera: &mut C, world: &P, dt: f32)
    where
        C: CameraRig + ?Sized,
        P: CollidableProvider + ?Sized,
    {
        let flags = self.keyboard.flags();
        if !flags.any_translation() {
            return;
        }
        let distance = dt * self.config.movement_speed;
        for direction in MoveDirection::ALL {
            if direction.is_held(&flags) && !self.try_move(camera, world, direction, distance) {
                self.blocked.push(direction);
            }
        }
    }

    /// Moves `distance` along `direction` unless the probe finds an obstacle.
    /// Returns whether the move was applied.
    pub fn try_move<C, P>(&self, camera: &mut C, world: &P, direction: MoveDirection, distance: f32) -> bool
    where
        C: CameraRig + ?Sized,
        P: CollidableProvider + ?Sized,
    {
        if let Some(hit) = self.probe(camera, world, direction, distance) {
            log::trace!(
                "{:?} move of {:.3} blocked by '{}' at {:.3}",
                direction,
                distance,
                hit.object,
                hit.distance
            );
            return false;
        }
        let (axis, signed) = direction.local_step(distance);
        camera.translate_on_axis(axis, signed);
        true
    }

    /// Nearest obstacle within `distance + collision_margin` along `direction`
    pub fn probe<C, P>(&self, camera: &C, world: &P, direction: MoveDirection, distance: f32) -> Option<Intersection>
    where
        C: CameraRig + ?Sized,
        P: CollidableProvider + ?Sized,
    {
        let ray_dir = direction.world_direction(camera.world_direction(), Vec3::Y);
        let caster = Raycaster::new(camera.position(), ray_dir, 0.0, distance + self.config.collision_margin);
        let objects = world.collidables();
        caster.intersect_objects(&objects).into_iter().next()
    }

    fn rotate<C: CameraRig + ?Sized>(&mut self, camera: &mut C, dt: f32) {
        let flags = self.keyboard.flags();
        let scale = match self.config.rotation_timing {
            RotationTiming::PerFrame => 1.0,
            RotationTiming::PerSecond => dt,
        };

        let yaw_step = self.config.look_speed * scale;
        if flags.yaw_left {
            self.theta -= yaw_step;
        }
        if flags.yaw_right {
            self.theta += yaw_step;
        }

        if self.config.look_vertical {
            let sign = if self.config.invert_vertical { -1.0 } else { 1.0 };
            let pitch_step = self.config.pitch_step_degrees * scale * sign;
            if flags.pitch_up {
                self.lat += pitch_step;
            }
            if flags.pitch_down {
                self.lat -= pitch_step;
            }
        }

        self.lat = self.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        self.phi = polar_angle(self.lat);
        self.target = camera.position() + spherical_direction(self.phi, self.theta) * LOOK_DISTANCE;
        camera.look_at(self.target);
    }
}

/// Key releases and focus loss, the events that only ever clear flags
fn releases_input(event: &WindowEvent) -> bool {
    match event {
        WindowEvent::KeyboardInput { event, .. } => !event.state.is_pressed(),
        WindowEvent::Focused(focused) => !focused,
        _ => false,
    }
}

fn polar_angle(lat: f32) -> f32 {
    (90.0 - lat).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_angles() {
        let controller = FirstPersonController::new(ControllerConfig::default());
        assert_eq!(controller.lat(), 0.0);
        assert_eq!(controller.theta(), 0.0);
        assert!((controller.phi() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(controller.blocked_moves().is_empty());
    }

    #[test]
    fn test_world_directions_from_facing() {
        let facing = Vec3::NEG_Z;
        assert_eq!(MoveDirection::Forward.world_direction(facing, Vec3::Y), Vec3::NEG_Z);
        assert_eq!(MoveDirection::Backward.world_direction(facing, Vec3::Y), Vec3::Z);
        assert!(MoveDirection::Right.world_direction(facing, Vec3::Y).abs_diff_eq(Vec3::X, 1e-6));
        assert!(MoveDirection::Left.world_direction(facing, Vec3::Y).abs_diff_eq(Vec3::NEG_X, 1e-6));
    }

    #[test]
    fn test_strafe_direction_degenerate_looking_up() {
        assert_eq!(MoveDirection::Left.world_direction(Vec3::Y, Vec3::Y), Vec3::ZERO);
    }

    #[test]
    fn test_local_steps() {
        assert_eq!(MoveDirection::Forward.local_step(2.0), (LocalAxis::Z, -2.0));
        assert_eq!(MoveDirection::Backward.local_step(2.0), (LocalAxis::Z, 2.0));
        assert_eq!(MoveDirection::Left.local_step(2.0), (LocalAxis::X, -2.0));
        assert_eq!(MoveDirection::Right.local_step(2.0), (LocalAxis::X, 2.0));
    }

    #[test]
    fn test_disabled_controller_ignores_keys() {
        let mut controller = FirstPersonController::new(ControllerConfig {
            enabled: false,
            ..Default::default()
        });
        assert_eq!(controller.press(KeyCode::KeyW), None);
        assert!(!controller.flags().forward);
    }

    #[test]
    fn test_release_while_disabled_clears_flag() {
        let mut controller = FirstPersonController::new(ControllerConfig::default());
        controller.press(KeyCode::KeyW);
        controller.config.enabled = false;

        assert_eq!(controller.release(KeyCode::KeyW), Some(Intent::MoveForward));
        assert!(!controller.flags().forward);
    }

    #[test]
    fn test_focus_loss_while_disabled_clears_flags() {
        let mut controller = FirstPersonController::new(ControllerConfig::default());
        controller.press(KeyCode::KeyD);
        controller.config.enabled = false;

        assert!(controller.process_window_event(WindowId::from(7u64), &WindowEvent::Focused(false)));
        assert!(!controller.flags().right);
        assert!(!controller.process_window_event(WindowId::from(7u64), &WindowEvent::Focused(true)));
    }

    #[test]
    fn test_polar_angle_bounds() {
        assert!((polar_angle(MAX_LATITUDE) - 1f32.to_radians()).abs() < 1e-6);
        assert!((polar_angle(-MAX_LATITUDE) - 179f32.to_radians()).abs() < 1e-6);
    }
}
