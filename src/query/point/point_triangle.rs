use crate::math::{Point, Real, Vector};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Triangle;
use crate::utils::closest_point_on_triangle;

impl PointQuery for Triangle {
    /// Projects a point on the triangle.
    ///
    /// Triangles are infinitely thin so the projection is never inside.
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let [a, b, c] = self.corners();
        PointProjection::new(false, closest_point_on_triangle(a, b, c, pt))
    }

    /// The triangle normal, flipped toward the side of `pt`.
    #[inline]
    fn normal_at_point(&self, pt: &Point<Real>) -> Vector<Real> {
        if self.signed_distance_to_plane(pt) >= 0.0 {
            *self.normal()
        } else {
            -*self.normal()
        }
    }
}
