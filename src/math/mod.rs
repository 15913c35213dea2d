mod aabb;
mod ray;
mod triangle;

pub use aabb::AABB;
pub use ray::{intersect_aabb, intersect_sphere, Ray};
pub use triangle::{moller_trumbore_intersect, Triangle};

/// Converts spherical look angles (polar `phi`, azimuth `theta`) to a unit direction
pub fn spherical_direction(phi: f32, theta: f32) -> glam::Vec3 {
    glam::Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
}
