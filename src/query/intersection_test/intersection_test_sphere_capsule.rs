use crate::query::point::project_on_capsule;
use crate::shape::{Capsule, Sphere};

/// Intersection test between a sphere and a possibly tapered capsule.
#[inline]
pub fn intersection_test_sphere_capsule(sphere: &Sphere, capsule: &Capsule) -> bool {
    project_on_capsule(capsule, &sphere.center).signed_distance <= sphere.radius()
}
