use glam::Vec3;

use super::common::{pyramid_triangles, solid_box};
use crate::geometry::Shape;
use crate::scene::{Scene, SceneNode};

/// Walled room with pillars, a sphere statue and a pyramid mesh
pub fn create_gallery_scene() -> Scene {
    let mut scene = Scene::new("gallery");

    let half_extent = 20.0;
    let wall_height = 6.0;
    let wall_thickness = 0.5;

    scene.add(solid_box("floor", [-half_extent, -0.5, -half_extent], [half_extent, 0.0, half_extent]));

    let walls = SceneNode::group("walls")
        .with_child(solid_box(
            "north wall",
            [-half_extent, 0.0, -half_extent - wall_thickness],
            [half_extent, wall_height, -half_extent],
        ))
        .with_child(solid_box(
            "south wall",
            [-half_extent, 0.0, half_extent],
            [half_extent, wall_height, half_extent + wall_thickness],
        ))
        .with_child(solid_box(
            "west wall",
            [-half_extent - wall_thickness, 0.0, -half_extent],
            [-half_extent, wall_height, half_extent],
        ))
        .with_child(solid_box(
            "east wall",
            [half_extent, 0.0, -half_extent],
            [half_extent + wall_thickness, wall_height, half_extent],
        ));
    scene.add(walls);

    let pillar_offset = 12.0;
    let pillars = [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)]
        .into_iter()
        .enumerate()
        .fold(SceneNode::group("pillars"), |group, (i, (sx, sz))| {
            group.with_child(
                solid_box(format!("pillar {}", i + 1), [-0.75, 0.0, -0.75], [0.75, wall_height, 0.75])
                    .with_translation(Vec3::new(sx * pillar_offset, 0.0, sz * pillar_offset)),
            )
        });
    scene.add(pillars);

    scene.add(
        SceneNode::group("statue")
            .with_translation(Vec3::new(0.0, 0.0, -10.0))
            .with_child(solid_box("plinth", [-1.0, 0.0, -1.0], [1.0, 1.0, 1.0]))
            .with_child(SceneNode::solid("bust", Shape::sphere(Vec3::new(0.0, 2.0, 0.0), 1.0))),
    );

    scene.add(
        SceneNode::solid("pyramid", Shape::mesh(pyramid_triangles(3.0, 4.0)))
            .with_translation(Vec3::new(10.0, 0.0, 0.0)),
    );

    // Decorative, walk-through
    scene.add(SceneNode::group("ceiling light").with_translation(Vec3::new(0.0, wall_height - 0.5, 0.0)));

    log::info!(
        "Gallery scene created: {} nodes, {} collidable",
        scene.node_count(),
        scene.collidables().len()
    );
    scene
}
