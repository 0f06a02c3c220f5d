use crate::shape::{Cuboid, Sphere};

/// Intersection test between a sphere and a box.
///
/// Accumulates the squared distance from the sphere center to the box along each local axis.
pub fn intersection_test_sphere_cuboid(sphere: &Sphere, cuboid: &Cuboid) -> bool {
    let local = cuboid.world_to_local(&sphere.center);
    let he = cuboid.half_size();
    let mut dist_sq = 0.0;

    for i in 0..3 {
        let excess = local[i].abs() - he[i];
        if excess > 0.0 {
            dist_sq += excess * excess;
        }
    }

    dist_sq <= sphere.radius() * sphere.radius()
}
