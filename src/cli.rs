// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::{ControllerConfig, RotationTiming};
use crate::scenes::ScenePreset;

#[derive(Parser, Debug, Clone)]
#[command(name = "walkthrough")]
#[command(about = "First-person walkthrough with collision-gated movement", long_about = None)]
pub struct Cli {
    /// Controller settings file (JSON). Flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Scene description file (JSON). Overrides --preset, spawn included.
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Built-in scene
    #[arg(long, value_enum, default_value_t = ScenePreset::Gallery)]
    pub preset: ScenePreset,

    /// Replay a key script headlessly and print a JSON report instead of opening a window
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Movement speed in units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Yaw step in radians
    #[arg(long)]
    pub look_speed: Option<f32>,

    /// Collision margin added to every probe
    #[arg(long)]
    pub margin: Option<f32>,

    #[arg(long)]
    pub invert_vertical: bool,

    /// Disable pitch keys
    #[arg(long)]
    pub no_look_vertical: bool,

    /// Scale yaw/pitch steps by frame time
    #[arg(long)]
    pub per_second_rotation: bool,
}

impl Cli {
    /// Loads the config file if given, then applies flag overrides
    pub fn controller_config(&self) -> anyhow::Result<ControllerConfig> {
        let mut config = match &self.config {
            Some(path) => ControllerConfig::load(path)?,
            None => ControllerConfig::default(),
        };
        if let Some(speed) = self.speed {
            config.movement_speed = speed;
        }
        if let Some(look_speed) = self.look_speed {
            config.look_speed = look_speed;
        }
        if let Some(margin) = self.margin {
            config.collision_margin = margin;
        }
        if self.invert_vertical {
            config.invert_vertical = true;
        }
        if self.no_look_vertical {
            config.look_vertical = false;
        }
        if self.per_second_rotation {
            config.rotation_timing = RotationTiming::PerSecond;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::parse_from(["walkthrough"]);
        assert_eq!(cli.preset, ScenePreset::Gallery);
        assert_eq!(cli.controller_config().unwrap(), ControllerConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "walkthrough",
            "--preset",
            "corridor",
            "--speed",
            "4.5",
            "--margin",
            "0.25",
            "--invert-vertical",
            "--no-look-vertical",
            "--per-second-rotation",
        ]);
        let config = cli.controller_config().unwrap();
        assert_eq!(cli.preset, ScenePreset::Corridor);
        assert_eq!(config.movement_speed, 4.5);
        assert_eq!(config.collision_margin, 0.25);
        assert!(config.invert_vertical);
        assert!(!config.look_vertical);
        assert_eq!(config.rotation_timing, RotationTiming::PerSecond);
    }

    #[test]
    fn negative_override_rejected() {
        let cli = Cli::parse_from(["walkthrough", "--speed=-3"]);
        assert!(cli.controller_config().is_err());
    }
}
