use crate::query::sat;
use crate::shape::Cuboid;

/// Intersection test between two boxes using the separating axis theorem.
#[inline]
pub fn intersection_test_cuboid_cuboid(cuboid1: &Cuboid, cuboid2: &Cuboid) -> bool {
    sat::cuboid_cuboid_find_separation(cuboid1, cuboid2).is_none()
}
