//! Functions to check if a point lies inside the prism spanned by a triangle.

use crate::math::{Point, Real, Vector};

/// Returns `true` if the projection of `p` along the triangle normal lies inside the triangle
/// `(v1, v2, v3)`.
///
/// The normal is derived from the winding of the corners. Points exactly on an edge are inside.
pub fn point_in_triangle(
    p: &Point<Real>,
    v1: &Point<Real>,
    v2: &Point<Real>,
    v3: &Point<Real>,
) -> bool {
    let normal = (v2 - v1).cross(&(v3 - v2));
    point_in_triangle_with_normal(p, v1, v2, v3, &normal)
}

/// Same as [`point_in_triangle`] but with a precomputed triangle normal.
///
/// The normal does not need to be normalized but must follow the corner winding.
pub fn point_in_triangle_with_normal(
    p: &Point<Real>,
    v1: &Point<Real>,
    v2: &Point<Real>,
    v3: &Point<Real>,
    normal: &Vector<Real>,
) -> bool {
    let corners = [(v1, v2), (v2, v3), (v3, v1)];

    corners
        .iter()
        .all(|(a, b)| (*b - *a).cross(&(p - *a)).dot(normal) >= 0.0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn point_inside_right_triangle() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(2.0, 0.0, 0.0);
        let c = Point::new(0.0, 2.0, 0.0);

        assert!(point_in_triangle(&Point::new(0.5, 0.5, 0.0), &a, &b, &c));
        assert!(point_in_triangle(&Point::new(0.5, 0.5, 3.0), &a, &b, &c));
        assert!(point_in_triangle(&Point::new(1.0, 0.0, 0.0), &a, &b, &c));
        assert!(!point_in_triangle(&Point::new(3.0, 3.0, 0.0), &a, &b, &c));
        assert!(!point_in_triangle(&Point::new(-0.1, 0.5, 0.0), &a, &b, &c));
    }
}
