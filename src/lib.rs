pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod first_person;
pub mod geometry;
pub mod math;
pub mod scene;
pub mod scenes;
pub mod script;
pub mod traits;
pub mod window;

pub use camera::Camera;
pub use config::{ControllerConfig, RotationTiming};
pub use first_person::{FirstPersonController, MoveDirection};
pub use geometry::Shape;
pub use scene::{Scene, SceneNode};
pub use scenes::{create_corridor_scene, create_gallery_scene, ScenePreset, SpawnPoint};
