use crate::query::sat;
use crate::shape::{Cuboid, Triangle};

/// Intersection test between a box and a triangle using the separating axis theorem.
#[inline]
pub fn intersection_test_cuboid_triangle(cuboid: &Cuboid, triangle: &Triangle) -> bool {
    sat::cuboid_triangle_find_separation(cuboid, triangle).is_none()
}
