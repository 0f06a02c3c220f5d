use crate::query::point::project_on_cylinder;
use crate::shape::{Cylinder, Sphere};

/// Intersection test between a sphere and a possibly tapered cylinder.
#[inline]
pub fn intersection_test_sphere_cylinder(sphere: &Sphere, cylinder: &Cylinder) -> bool {
    project_on_cylinder(cylinder, &sphere.center).signed_distance <= sphere.radius()
}
