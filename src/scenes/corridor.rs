use glam::Vec3;

use super::common::solid_box;
use crate::scene::{Scene, SceneNode};

/// Long corridor down -Z with crates alternating on either side
pub fn create_corridor_scene() -> Scene {
    let mut scene = Scene::new("corridor");

    let corridor_length = 200.0;
    let half_width = 3.0;
    let height = 4.0;

    scene.add(solid_box("floor", [-half_width, -0.5, -corridor_length], [half_width, 0.0, 10.0]));
    scene.add(
        SceneNode::group("shell")
            .with_child(solid_box("left wall", [-half_width - 0.5, 0.0, -corridor_length], [-half_width, height, 10.0]))
            .with_child(solid_box("right wall", [half_width, 0.0, -corridor_length], [half_width + 0.5, height, 10.0]))
            .with_child(solid_box(
                "end wall",
                [-half_width, 0.0, -corridor_length - 0.5],
                [half_width, height, -corridor_length],
            ))
            .with_child(solid_box("back wall", [-half_width, 0.0, 10.0], [half_width, height, 10.5])),
    );

    let crate_spacing = 20.0;
    let crate_count = (corridor_length / crate_spacing) as usize - 1;
    let crates = (1..=crate_count).fold(SceneNode::group("crates"), |group, i| {
        let side = if i % 2 == 0 { 1.0 } else { -1.0 };
        let z = -(i as f32) * crate_spacing;
        group.with_child(
            solid_box(format!("crate {i}"), [-0.75, 0.0, -0.75], [0.75, 1.5, 0.75])
                .with_translation(Vec3::new(side * (half_width - 1.0), 0.0, z)),
        )
    });
    scene.add(crates);

    log::info!(
        "Corridor scene created: {} nodes, {} collidable",
        scene.node_count(),
        scene.collidables().len()
    );
    scene
}
