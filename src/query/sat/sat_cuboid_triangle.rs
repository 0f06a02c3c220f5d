use crate::math::{Real, Vector};
use crate::query::sat::{cuboid_projection, ProjectionInterval};
use crate::shape::{Cuboid, Triangle};
use crate::utils::GEOMETRY_EPSILON;
use arrayvec::ArrayVec;

/// The thirteen candidate separating axes of a box and a triangle: the triangle normal, the
/// three box axes and the cross products of the triangle edges with the box axes.
///
/// Cross products of nearly parallel directions are skipped. The returned axes are normalized.
pub fn cuboid_triangle_candidate_axes(
    cuboid: &Cuboid,
    triangle: &Triangle,
) -> ArrayVec<Vector<Real>, 13> {
    let box_axes = cuboid.basis().axes();
    let mut result = ArrayVec::new();

    result.push(*triangle.normal());
    result.extend(box_axes);

    for edge in triangle.edges() {
        for axis in &box_axes {
            if let Some(axis) = edge.cross(axis).try_normalize(GEOMETRY_EPSILON) {
                result.push(axis);
            }
        }
    }

    result
}

/// Projection of a triangle onto `axis`.
#[inline]
pub fn triangle_projection(triangle: &Triangle, axis: &Vector<Real>) -> ProjectionInterval {
    ProjectionInterval::of_points(triangle.corners(), axis)
}

/// Finds an axis separating a box from a triangle, if any.
pub fn cuboid_triangle_find_separation(
    cuboid: &Cuboid,
    triangle: &Triangle,
) -> Option<Vector<Real>> {
    cuboid_triangle_candidate_axes(cuboid, triangle)
        .into_iter()
        .find(|axis| {
            cuboid_projection(cuboid, axis).gap(&triangle_projection(triangle, axis)) > 0.0
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point;

    #[test]
    fn triangle_above_box_is_separated_by_its_normal() {
        let cuboid = Cuboid::new(Point::origin(), Vector::repeat(1.0)).unwrap();
        let low = Triangle::new(
            Point::new(-3.0, -3.0, 0.5),
            Point::new(3.0, -3.0, 0.5),
            Point::new(0.0, 3.0, 0.5),
        )
        .unwrap();
        let high = Triangle::new(
            Point::new(-3.0, -3.0, 1.5),
            Point::new(3.0, -3.0, 1.5),
            Point::new(0.0, 3.0, 1.5),
        )
        .unwrap();

        assert!(cuboid_triangle_find_separation(&cuboid, &low).is_none());
        assert_eq!(cuboid_triangle_find_separation(&cuboid, &high), Some(Vector::z()));
    }
}
