mod common;
mod corridor;
mod gallery;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::scene::Scene;

pub use common::{pyramid_triangles, solid_box, EYE_HEIGHT};
pub use corridor::create_corridor_scene;
pub use gallery::create_gallery_scene;

/// Built-in scenes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ScenePreset {
    #[default]
    Gallery,
    Corridor,
}

/// Where the camera starts and what it initially faces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl ScenePreset {
    pub fn build(self) -> Scene {
        match self {
            ScenePreset::Gallery => create_gallery_scene(),
            ScenePreset::Corridor => create_corridor_scene(),
        }
    }

    pub fn spawn(self) -> SpawnPoint {
        let position = match self {
            ScenePreset::Gallery => Vec3::new(0.0, EYE_HEIGHT, 15.0),
            ScenePreset::Corridor => Vec3::new(0.0, EYE_HEIGHT, 5.0),
        };
        SpawnPoint {
            position,
            look_at: position + Vec3::NEG_Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Ray;
    use crate::traits::Collidable;

    #[test]
    fn test_gallery_collidables_include_nested_pillars() {
        let scene = create_gallery_scene();
        let names: Vec<_> = scene.collidables().iter().map(|c| c.name.to_string()).collect();
        assert!(names.contains(&"pillar 4".to_string()));
        assert!(names.contains(&"bust".to_string()));
        assert!(!names.contains(&"ceiling light".to_string()));
    }

    #[test]
    fn test_spawn_points_start_clear_of_geometry() {
        for preset in [ScenePreset::Gallery, ScenePreset::Corridor] {
            let scene = preset.build();
            let spawn = preset.spawn();
            let inside = scene
                .collidables()
                .iter()
                .any(|c| c.bounds().contains(spawn.position));
            assert!(!inside, "{preset:?} spawn inside geometry");
        }
    }

    #[test]
    fn test_corridor_end_wall_reachable_by_ray() {
        let scene = create_corridor_scene();
        let spawn = ScenePreset::Corridor.spawn();
        let ray = Ray::new(spawn.position, Vec3::NEG_Z);
        let nearest = scene
            .collidables()
            .iter()
            .filter_map(|c| c.raycast(&ray).map(|t| (t, c.name)))
            .min_by(|a, b| a.0.total_cmp(&b.0));
        assert_eq!(nearest.map(|(_, name)| name), Some("end wall"));
    }
}
