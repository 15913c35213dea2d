use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::AABB;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    pub fn bounds(&self) -> AABB {
        AABB {
            min: self.v0.min(self.v1).min(self.v2),
            max: self.v0.max(self.v1).max(self.v2),
        }
    }

    pub fn translated(&self, offset: Vec3) -> Triangle {
        Triangle::new(self.v0 + offset, self.v1 + offset, self.v2 + offset)
    }
}

/// Möller-Trumbore ray-triangle intersection, both faces.
/// Returns the distance along `ray_dir`.
pub fn moller_trumbore_intersect(ray_origin: Vec3, ray_dir: Vec3, triangle: &Triangle) -> Option<f32> {
    const EPSILON: f32 = 1e-6;

    let edge1 = triangle.v1 - triangle.v0;
    let edge2 = triangle.v2 - triangle.v0;

    let h = ray_dir.cross(edge2);
    let a = edge1.dot(h);

    // Parallel to the triangle plane
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray_origin - triangle.v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray_dir.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    (t >= EPSILON).then_some(t)
}
