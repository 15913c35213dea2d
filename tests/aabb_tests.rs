use glam::Vec3;
use walkthrough::math::AABB;

#[cfg(test)]
mod aabb_tests {
    use super::*;

    #[test]
    fn test_aabb_union_creates_bounding_box() {
        let aabb1 = AABB {
            min: Vec3::new(0.0, 0.0, 0.0),
            max: Vec3::new(10.0, 10.0, 10.0),
        };
        let aabb2 = AABB {
            min: Vec3::new(5.0, 5.0, 5.0),
            max: Vec3::new(15.0, 15.0, 15.0),
        };

        let union = aabb1.union(&aabb2);

        assert_eq!(union.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(union.max, Vec3::new(15.0, 15.0, 15.0));
    }

    #[test]
    fn test_aabb_union_with_negative_coords() {
        let aabb1 = AABB {
            min: Vec3::new(-10.0, -10.0, -10.0),
            max: Vec3::new(0.0, 0.0, 0.0),
        };
        let aabb2 = AABB {
            min: Vec3::new(-5.0, -5.0, -5.0),
            max: Vec3::new(5.0, 5.0, 5.0),
        };

        let union = aabb1.union(&aabb2);

        assert_eq!(union.min, Vec3::new(-10.0, -10.0, -10.0));
        assert_eq!(union.max, Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_aabb_from_center_matches_obstacle_box() {
        let aabb = AABB::from_center(Vec3::new(0.0, 0.0, -50.0), Vec3::splat(2.0));

        assert_eq!(aabb.min, Vec3::new(-2.0, -2.0, -52.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 2.0, -48.0));
        assert_eq!(aabb.center(), Vec3::new(0.0, 0.0, -50.0));
        assert_eq!(aabb.half_size(), Vec3::splat(2.0));
    }

    #[test]
    fn test_aabb_contains_boundary_points() {
        let aabb = AABB::new(Vec3::ZERO, Vec3::ONE);

        assert!(aabb.contains(Vec3::ZERO));
        assert!(aabb.contains(Vec3::ONE));
        assert!(aabb.contains(Vec3::splat(0.5)));
        assert!(!aabb.contains(Vec3::new(1.01, 0.5, 0.5)));
    }

    #[test]
    fn test_aabb_translated_keeps_size() {
        let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0)).translated(Vec3::new(10.0, 0.0, 0.0));

        assert_eq!(aabb.center(), Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(aabb.half_size(), Vec3::ONE);
    }
}
