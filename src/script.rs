//! Headless replay of timed key events against a scene.

use std::path::Path;

use anyhow::{bail, ensure, Context};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use winit::event::ElementState;

use crate::camera::Camera;
use crate::core::input_adapter::parse_key_code;
use crate::first_person::FirstPersonController;
use crate::traits::{CameraRig, CollidableProvider};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedKey {
    /// Frame at whose start the event is delivered
    pub frame: u32,
    /// winit key code name, e.g. `"KeyW"`
    pub key: String,
    pub pressed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    #[serde(default = "default_frame_dt")]
    pub frame_dt: f32,
    pub frames: u32,
    #[serde(default)]
    pub events: Vec<ScriptedKey>,
}

/// One hour of frames at 60 Hz
pub const MAX_FRAMES: u32 = 216_000;

fn default_frame_dt() -> f32 {
    1.0 / 60.0
}

/// Camera state after one replayed frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSample {
    pub frame: u32,
    pub position: Vec3,
    pub target: Vec3,
    pub blocked: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub scene: String,
    pub samples: Vec<FrameSample>,
    pub final_position: Vec3,
    pub blocked_moves: usize,
}

impl InputScript {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let script: InputScript = serde_json::from_str(json).context("invalid input script")?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input script {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to load {}", path.display()))
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.frame_dt.is_finite() && self.frame_dt >= 0.0,
            "frame_dt must be a non-negative number, got {}",
            self.frame_dt
        );
        ensure!(
            self.frames <= MAX_FRAMES,
            "frames must be at most {}, got {}",
            MAX_FRAMES,
            self.frames
        );
        for event in &self.events {
            if parse_key_code(&event.key).is_none() {
                bail!("unknown key '{}' at frame {}", event.key, event.frame);
            }
            ensure!(
                event.frame < self.frames,
                "event for '{}' at frame {} is past the last frame {}",
                event.key,
                event.frame,
                self.frames.saturating_sub(1)
            );
        }
        Ok(())
    }

    /// Runs every frame: deliver that frame's key events, then `update_view`.
    pub fn replay<P>(&self, controller: &mut FirstPersonController, camera: &mut Camera, world: &P) -> ReplayReport
    where
        P: CollidableProvider + ?Sized,
    {
        let mut events: Vec<&ScriptedKey> = self.events.iter().collect();
        events.sort_by_key(|event| event.frame);
        let mut pending = events.into_iter().peekable();

        let mut samples = Vec::with_capacity(self.frames as usize);
        let mut blocked_moves = 0;

        for frame in 0..self.frames {
            while let Some(event) = pending.next_if(|event| event.frame == frame) {
                if let Some(code) = parse_key_code(&event.key) {
                    let state = if event.pressed {
                        ElementState::Pressed
                    } else {
                        ElementState::Released
                    };
                    controller.handle_key(code, state, false);
                }
            }

            controller.update_view(camera, world, self.frame_dt);
            let blocked = controller.blocked_moves().len();
            blocked_moves += blocked;
            samples.push(FrameSample {
                frame,
                position: camera.position(),
                target: controller.target(),
                blocked,
            });
        }

        log::info!(
            "Replayed {} frames in '{}': {} blocked moves",
            self.frames,
            world.name(),
            blocked_moves
        );

        ReplayReport {
            scene: world.name().to_string(),
            samples,
            final_position: camera.position(),
            blocked_moves,
        }
    }
}
