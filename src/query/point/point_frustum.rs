use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Frustum;

const MAX_PROJECTION_ITERATIONS: usize = 64;

impl Frustum {
    /// Projects `pt` on the intersection of the six half-spaces using Dykstra's alternating
    /// projections.
    fn project_outside_point(&self, pt: &Point<Real>) -> Point<Real> {
        let mut x = *pt;
        let mut increments = [Vector::zeros(); 6];

        for _ in 0..MAX_PROJECTION_ITERATIONS {
            let mut moved = 0.0;

            for (plane, increment) in self.planes().iter().zip(increments.iter_mut()) {
                let y = x + *increment;
                let dist = plane.signed_distance(&y);
                let projected = if dist < 0.0 {
                    y - plane.normal * dist
                } else {
                    y
                };

                *increment = y - projected;
                moved += na::distance_squared(&projected, &x);
                x = projected;
            }

            if moved <= DEFAULT_EPSILON {
                break;
            }
        }

        x
    }
}

impl PointQuery for Frustum {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        if self.contains_point(pt) {
            PointProjection::new(true, *pt)
        } else {
            PointProjection::new(false, self.project_outside_point(pt))
        }
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.planes().iter().all(|p| p.signed_distance(pt) >= 0.0)
    }

    fn normal_at_point(&self, pt: &Point<Real>) -> Vector<Real> {
        let nearest_plane = self.planes().iter().min_by(|a, b| {
            a.signed_distance(pt)
                .total_cmp(&b.signed_distance(pt))
        });
        let fallback = nearest_plane.map(|p| -p.normal).unwrap_or_else(Vector::z);

        if self.contains_point(pt) {
            fallback
        } else {
            (pt - self.project_outside_point(pt))
                .try_normalize(DEFAULT_EPSILON)
                .unwrap_or(fallback)
        }
    }
}
