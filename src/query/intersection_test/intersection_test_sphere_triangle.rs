use crate::shape::{Sphere, Triangle};
use crate::utils::{closest_point_on_triangle, GEOMETRY_EPSILON};

/// Intersection test between a sphere and a triangle.
#[inline]
pub fn intersection_test_sphere_triangle(sphere: &Sphere, triangle: &Triangle) -> bool {
    let [a, b, c] = triangle.corners();
    let closest = closest_point_on_triangle(a, b, c, &sphere.center);
    let r = sphere.radius() + GEOMETRY_EPSILON;
    na::distance_squared(&closest, &sphere.center) <= r * r
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point;

    #[test]
    fn sphere_resting_on_triangle_overlaps() {
        let triangle = Triangle::new(
            Point::new(-1.0, 0.0, -1.0),
            Point::new(1.0, 0.0, -1.0),
            Point::new(0.0, 0.0, 1.0),
        )
        .unwrap();
        let resting = Sphere::new(Point::new(0.0, 0.5 + 1.0e-6, 0.0), 0.5);
        let above = Sphere::new(Point::new(0.0, 0.5 + 1.0e-3, 0.0), 0.5);

        assert!(intersection_test_sphere_triangle(&resting, &triangle));
        assert!(!intersection_test_sphere_triangle(&above, &triangle));
    }
}
