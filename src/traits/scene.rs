use crate::math::{Ray, AABB};

/// Geometry that blocks camera movement
pub trait Collidable {
    /// Distance along `ray` to the first surface, if any
    fn raycast(&self, ray: &Ray) -> Option<f32>;

    /// World-space bounds
    fn bounds(&self) -> AABB;

    /// Name used in logs and intersection reports
    fn label(&self) -> &str {
        "collidable"
    }
}

/// Supplies the current collidable set. Queried fresh on every probe.
pub trait CollidableProvider {
    type Item<'a>: Collidable
    where
        Self: 'a;

    fn collidables(&self) -> Vec<Self::Item<'_>>;

    fn name(&self) -> &str {
        "Scene"
    }
}

impl<T: Collidable + ?Sized> Collidable for &T {
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        (**self).raycast(ray)
    }

    fn bounds(&self) -> AABB {
        (**self).bounds()
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}
