use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::{intersect_aabb, intersect_sphere, moller_trumbore_intersect, Ray, Triangle, AABB};
use crate::traits::Collidable;

/// Collision geometry attached to a scene node, in node-local coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Cuboid { bounds: AABB },
    Sphere { center: Vec3, radius: f32 },
    Mesh { triangles: Vec<Triangle> },
}

impl Shape {
    pub fn cuboid(min: Vec3, max: Vec3) -> Self {
        Shape::Cuboid {
            bounds: AABB::new(min, max),
        }
    }

    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Shape::Sphere {
            center,
            radius: radius.abs(),
        }
    }

    pub fn mesh(triangles: Vec<Triangle>) -> Self {
        Shape::Mesh { triangles }
    }

    /// Nearest hit for a ray given in the shape's local frame.
    /// Solids only report their outer surface: a ray starting inside a
    /// cuboid or sphere hits nothing.
    pub fn intersect_local(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        match self {
            Shape::Cuboid { bounds } if bounds.contains(origin) => None,
            Shape::Cuboid { bounds } => intersect_aabb(origin, direction, bounds.min, bounds.max),
            Shape::Sphere { center, radius } if origin.distance_squared(*center) <= radius * radius => None,
            Shape::Sphere { center, radius } => intersect_sphere(origin, direction, *center, *radius),
            Shape::Mesh { triangles } => triangles
                .iter()
                .filter_map(|tri| moller_trumbore_intersect(origin, direction, tri))
                .min_by(f32::total_cmp),
        }
    }

    pub fn local_bounds(&self) -> AABB {
        match self {
            Shape::Cuboid { bounds } => *bounds,
            Shape::Sphere { center, radius } => AABB::from_center(*center, Vec3::splat(*radius)),
            Shape::Mesh { triangles } => triangles
                .iter()
                .map(Triangle::bounds)
                .reduce(|acc, b| acc.union(&b))
                .unwrap_or(AABB::new(Vec3::ZERO, Vec3::ZERO)),
        }
    }
}

impl Collidable for Shape {
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        if ray.is_degenerate() {
            return None;
        }
        self.intersect_local(ray.origin, ray.direction)
    }

    fn bounds(&self) -> AABB {
        self.local_bounds()
    }

    fn label(&self) -> &str {
        match self {
            Shape::Cuboid { .. } => "cuboid",
            Shape::Sphere { .. } => "sphere",
            Shape::Mesh { .. } => "mesh",
        }
    }
}
