//! Plane-by-plane tests against frustums.
//!
//! A volume is rejected as soon as it lies entirely on the outer side of one of the six planes.
//! Volumes straddling several planes near a frustum corner may be reported as intersecting.

use crate::math::{Real, Vector};
use crate::shape::{Capsule, Cuboid, Cylinder, Frustum, Sphere};

#[inline]
fn all_planes_reach(frustum: &Frustum, reach: impl Fn(&Vector<Real>, Real) -> bool) -> bool {
    frustum
        .planes()
        .iter()
        .all(|plane| reach(&plane.normal, plane.distance))
}

/// Intersection test between a sphere and a frustum.
pub fn intersection_test_sphere_frustum(sphere: &Sphere, frustum: &Frustum) -> bool {
    frustum
        .planes()
        .iter()
        .all(|plane| plane.signed_distance(&sphere.center) >= -sphere.radius())
}

/// Intersection test between a box and a frustum.
pub fn intersection_test_cuboid_frustum(cuboid: &Cuboid, frustum: &Frustum) -> bool {
    all_planes_reach(frustum, |normal, distance| {
        normal.dot(&cuboid.center.coords) + distance + cuboid.projected_radius(normal) >= 0.0
    })
}

/// Intersection test between a possibly tapered cylinder and a frustum.
///
/// The extent of a cap disk along a plane normal is `±h (n·u) + r sqrt(1 - (n·u)²)`, `u` being
/// the cylinder axis.
pub fn intersection_test_cylinder_frustum(cylinder: &Cylinder, frustum: &Frustum) -> bool {
    let axis = cylinder.axis();
    let h = cylinder.half_height();

    all_planes_reach(frustum, |normal, distance| {
        let along = normal.dot(&axis);
        let across = (1.0 - along * along).max(0.0).sqrt();
        let top = h * along + cylinder.top_radius() * across;
        let bottom = -h * along + cylinder.bottom_radius() * across;

        normal.dot(&cylinder.center.coords) + distance + top.max(bottom) >= 0.0
    })
}

/// Intersection test between a possibly tapered capsule and a frustum.
pub fn intersection_test_capsule_frustum(capsule: &Capsule, frustum: &Frustum) -> bool {
    let (top, bottom) = (capsule.top_center(), capsule.bottom_center());

    frustum.planes().iter().all(|plane| {
        plane.signed_distance(&top) + capsule.top_radius() >= 0.0
            || plane.signed_distance(&bottom) + capsule.bottom_radius() >= 0.0
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point;

    fn frustum() -> Frustum {
        Frustum::perspective(core::f64::consts::FRAC_PI_2, 1.0, 1.0, 10.0).unwrap()
    }

    #[test]
    fn boxes_inside_and_beyond_far_plane() {
        let inside = Cuboid::new(Point::new(0.0, 0.0, 5.0), Vector::repeat(1.0)).unwrap();
        let beyond = Cuboid::new(Point::new(0.0, 0.0, 50.0), Vector::repeat(1.0)).unwrap();

        assert!(intersection_test_cuboid_frustum(&inside, &frustum()));
        assert!(!intersection_test_cuboid_frustum(&beyond, &frustum()));
    }

    #[test]
    fn lying_cylinder_reaches_into_frustum() {
        let rot = crate::math::Rotation::from_axis_angle(
            &Vector::x_axis(),
            core::f64::consts::FRAC_PI_2,
        );
        // The axis now runs along z: the cylinder spans z in [-1.5, 0.5] beside the near plane.
        let short = Cylinder::new(Point::new(0.0, 0.0, -0.5), 1.0, 0.2).with_orientation(rot);
        let long = Cylinder::new(Point::new(0.0, 0.0, -0.5), 2.0, 0.2).with_orientation(rot);

        assert!(!intersection_test_cylinder_frustum(&short, &frustum()));
        assert!(intersection_test_cylinder_frustum(&long, &frustum()));
        assert!(intersection_test_sphere_frustum(
            &Sphere::new(Point::new(0.0, 0.0, 0.5), 0.6),
            &frustum()
        ));
    }
}
