use glam::Vec3;

/// Half-line with a unit (or zero) direction
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Builds a ray, normalizing `direction`. A degenerate direction stays zero.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    pub fn is_degenerate(&self) -> bool {
        self.direction.length_squared() == 0.0
    }
}

/// Slab test. Returns the entry distance, or the exit distance when the
/// origin is inside the box.
pub fn intersect_aabb(ray_origin: Vec3, ray_dir: Vec3, box_min: Vec3, box_max: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-8;

    // Near-zero components clamp to a huge inverse (effectively infinity)
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.x) } else { 1.0 / ray_dir.x },
        if ray_dir.y.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.y) } else { 1.0 / ray_dir.y },
        if ray_dir.z.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.z) } else { 1.0 / ray_dir.z },
    );

    let t_min = (box_min - ray_origin) * inv_dir;
    let t_max = (box_max - ray_origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.x.max(t1.y).max(t1.z);
    let t_far = t2.x.min(t2.y).min(t2.z);

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    if t_near < 0.0 {
        (t_far > 0.001).then_some(t_far)
    } else {
        Some(t_near)
    }
}

/// Nearest non-negligible hit distance against a sphere
pub fn intersect_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_dir.dot(ray_dir);
    if a == 0.0 {
        return None;
    }
    let half_b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t = (-half_b - sqrt_d) / a;
    if t > 1e-4 {
        return Some(t);
    }
    let t = (-half_b + sqrt_d) / a;
    (t > 1e-4).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_new_normalizes() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(ray.direction, Vec3::NEG_Z);
        assert_eq!(ray.at(2.5), Vec3::new(0.0, 0.0, -2.5));
    }

    #[test]
    fn test_ray_zero_direction_is_degenerate() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert!(ray.is_degenerate());
    }

    #[test]
    fn test_intersect_aabb_hit() {
        let t = intersect_aabb(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(5.0, -1.0, -1.0),
            Vec3::new(10.0, 1.0, 1.0),
        );
        assert!((t.unwrap() - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_intersect_aabb_miss() {
        let t = intersect_aabb(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(5.0, 2.0, 2.0),
            Vec3::new(10.0, 3.0, 3.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_intersect_aabb_inside_returns_exit() {
        let t = intersect_aabb(
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::X,
            Vec3::new(0.0, -1.0, -1.0),
            Vec3::new(10.0, 1.0, 1.0),
        );
        assert!((t.unwrap() - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_intersect_sphere_front_and_inside() {
        let front = intersect_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -10.0), 2.0);
        assert!((front.unwrap() - 8.0).abs() < 1e-4);

        let inside = intersect_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::ZERO, 3.0);
        assert!((inside.unwrap() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_intersect_sphere_behind() {
        let t = intersect_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -10.0), 2.0);
        assert!(t.is_none());
    }
}
