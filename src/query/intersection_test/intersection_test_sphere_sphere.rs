use crate::shape::Sphere;
use crate::utils::GEOMETRY_EPSILON;

/// Intersection test between two spheres.
///
/// Spheres closer than [`GEOMETRY_EPSILON`] to touching are reported as overlapping.
#[inline]
pub fn intersection_test_sphere_sphere(sphere1: &Sphere, sphere2: &Sphere) -> bool {
    let r = sphere1.radius() + sphere2.radius() + GEOMETRY_EPSILON;
    na::distance_squared(&sphere1.center, &sphere2.center) <= r * r
}
