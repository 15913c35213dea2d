use glam::Vec3;

use crate::math::Ray;
use crate::traits::Collidable;

/// A single ray hit
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub distance: f32,
    pub point: Vec3,
    pub object: String,
}

/// Casts a ray against collidables, keeping only hits in `[near, far]`
#[derive(Debug, Clone, Copy)]
pub struct Raycaster {
    pub ray: Ray,
    pub near: f32,
    pub far: f32,
}

impl Raycaster {
    pub fn new(origin: Vec3, direction: Vec3, near: f32, far: f32) -> Self {
        Self {
            ray: Ray::new(origin, direction),
            near,
            far,
        }
    }

    pub fn in_range(&self, distance: f32) -> bool {
        distance >= self.near && distance <= self.far
    }

    pub fn intersect_object<C: Collidable + ?Sized>(&self, object: &C) -> Option<Intersection> {
        if self.ray.is_degenerate() {
            return None;
        }
        object
            .raycast(&self.ray)
            .filter(|&t| self.in_range(t))
            .map(|distance| Intersection {
                distance,
                point: self.ray.at(distance),
                object: object.label().to_string(),
            })
    }

    /// Hits across all objects, nearest first
    pub fn intersect_objects<C: Collidable>(&self, objects: &[C]) -> Vec<Intersection> {
        let mut hits: Vec<Intersection> = objects
            .iter()
            .filter_map(|object| self.intersect_object(object))
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Shape;

    fn wall_at(z: f32) -> Shape {
        Shape::cuboid(Vec3::new(-5.0, -5.0, z - 0.5), Vec3::new(5.0, 5.0, z + 0.5))
    }

    #[test]
    fn test_hits_sorted_nearest_first() {
        let caster = Raycaster::new(Vec3::ZERO, Vec3::NEG_Z, 0.0, 100.0);
        let objects = [wall_at(-30.0), wall_at(-10.0), wall_at(-20.0)];
        let hits = caster.intersect_objects(&objects);
        let distances: Vec<f32> = hits.iter().map(|h| h.distance.round()).collect();
        assert_eq!(distances, vec![10.0, 20.0, 30.0]);
        assert_eq!(hits[0].object, "cuboid");
        assert!(hits[0].point.abs_diff_eq(Vec3::new(0.0, 0.0, -9.5), 1e-4));
    }

    #[test]
    fn test_far_limit_excludes_distant_hits() {
        let caster = Raycaster::new(Vec3::ZERO, Vec3::NEG_Z, 0.0, 9.0);
        assert!(caster.intersect_objects(&[wall_at(-10.0)]).is_empty());
    }

    #[test]
    fn test_near_limit_excludes_close_hits() {
        let caster = Raycaster::new(Vec3::ZERO, Vec3::NEG_Z, 12.0, 50.0);
        let hits = caster.intersect_objects(&[wall_at(-10.0), wall_at(-20.0)]);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].distance - 19.5).abs() < 1e-4);
    }

    #[test]
    fn test_zero_direction_hits_nothing() {
        let caster = Raycaster::new(Vec3::ZERO, Vec3::ZERO, 0.0, 100.0);
        assert!(caster.intersect_objects(&[wall_at(0.0)]).is_empty());
    }

    #[test]
    fn test_empty_set_hits_nothing() {
        let caster = Raycaster::new(Vec3::ZERO, Vec3::NEG_Z, 0.0, 100.0);
        let empty: [Shape; 0] = [];
        assert!(caster.intersect_objects(&empty).is_empty());
    }
}
