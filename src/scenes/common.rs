use glam::Vec3;

use crate::geometry::Shape;
use crate::math::Triangle;
use crate::scene::SceneNode;

/// Eye height used by every preset spawn point
pub const EYE_HEIGHT: f32 = 1.6;

pub fn solid_box(name: impl Into<String>, min: [f32; 3], max: [f32; 3]) -> SceneNode {
    SceneNode::solid(name, Shape::cuboid(Vec3::from_array(min), Vec3::from_array(max)))
}

/// Square pyramid centered on the origin, base on y = 0
pub fn pyramid_triangles(half_base: f32, height: f32) -> Vec<Triangle> {
    let apex = Vec3::new(0.0, height, 0.0);
    let p0 = Vec3::new(-half_base, 0.0, -half_base);
    let p1 = Vec3::new(half_base, 0.0, -half_base);
    let p2 = Vec3::new(half_base, 0.0, half_base);
    let p3 = Vec3::new(-half_base, 0.0, half_base);

    vec![
        Triangle::new(p0, p1, apex),
        Triangle::new(p1, p2, apex),
        Triangle::new(p2, p3, apex),
        Triangle::new(p3, p0, apex),
        Triangle::new(p0, p2, p1),
        Triangle::new(p0, p3, p2),
    ]
}
