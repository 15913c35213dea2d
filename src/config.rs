//! Controller tuning. Every field has a default so partial JSON files work.

use std::path::Path;

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

/// How yaw and pitch steps relate to frame time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationTiming {
    /// Fixed step per `update_view` call; turn rate follows the frame rate
    #[default]
    PerFrame,
    /// Steps are rates, multiplied by elapsed seconds
    PerSecond,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Translation speed in world units per second.
    pub movement_speed: f32,
    /// Yaw step in radians.
    pub look_speed: f32,
    /// Allow pitch changes.
    pub look_vertical: bool,
    /// Swap pitch up and down.
    pub invert_vertical: bool,
    /// Extra probe length beyond the travel distance.
    pub collision_margin: f32,
    /// Pitch step in degrees.
    pub pitch_step_degrees: f32,
    pub rotation_timing: RotationTiming,
    /// When false, key events and frame updates are ignored.
    pub enabled: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            movement_speed: 10.0,
            look_speed: 0.02,
            look_vertical: true,
            invert_vertical: false,
            collision_margin: 1.0,
            pitch_step_degrees: 0.5,
            rotation_timing: RotationTiming::PerFrame,
            enabled: true,
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("movement_speed", self.movement_speed),
            ("look_speed", self.look_speed),
            ("collision_margin", self.collision_margin),
            ("pitch_step_degrees", self.pitch_step_degrees),
        ] {
            ensure!(value.is_finite(), "{name} must be finite, got {value}");
            ensure!(value >= 0.0, "{name} must not be negative, got {value}");
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: ControllerConfig = serde_json::from_str(json).context("invalid controller config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to load {}", path.display()))
    }
}
