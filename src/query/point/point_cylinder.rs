use crate::math::{Point, Real, Vector};
use crate::query::point::project_on_cylinder;
use crate::query::{PointProjection, PointQuery};
use crate::shape::Cylinder;

impl PointQuery for Cylinder {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let proj = project_on_cylinder(self, pt);

        if proj.signed_distance <= 0.0 {
            PointProjection::new(true, *pt)
        } else {
            PointProjection::new(false, proj.point)
        }
    }

    #[inline]
    fn normal_at_point(&self, pt: &Point<Real>) -> Vector<Real> {
        project_on_cylinder(self, pt).normal
    }
}
