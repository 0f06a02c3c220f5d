use crate::math::{Point, Real, Vector};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Sphere;

impl PointQuery for Sphere {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let dpt = pt - self.center;
        let dist_squared = dpt.norm_squared();
        let inside = dist_squared <= self.radius() * self.radius();

        if inside {
            PointProjection::new(true, *pt)
        } else {
            let proj = self.center + dpt * (self.radius() / dist_squared.sqrt());
            PointProjection::new(false, proj)
        }
    }

    #[inline]
    fn normal_at_point(&self, pt: &Point<Real>) -> Vector<Real> {
        (pt - self.center)
            .try_normalize(0.0)
            .unwrap_or_else(Vector::y)
    }
}
