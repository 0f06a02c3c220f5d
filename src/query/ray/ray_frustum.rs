use crate::math::Real;
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{Frustum, Plane};
use crate::utils::RAY_PARALLEL_EPSILON;

impl RayCast for Frustum {
    /// Clips the ray against the six half-spaces of the frustum.
    fn cast_ray(&self, ray: &Ray) -> Option<RayIntersection> {
        let mut enter: (Real, Option<&Plane>) = (0.0, None);
        let mut exit: (Real, Option<&Plane>) = (1.0, None);

        for plane in self.planes() {
            let dist = plane.signed_distance(&ray.origin);
            let rate = plane.normal.dot(&ray.dir);

            if rate.abs() <= RAY_PARALLEL_EPSILON {
                if dist < 0.0 {
                    return None;
                }
                continue;
            }

            let toi = -dist / rate;

            if rate > 0.0 {
                // Moving toward the inner side of the plane.
                if toi > enter.0 {
                    enter = (toi, Some(plane));
                }
            } else if toi < exit.0 {
                exit = (toi, Some(plane));
            }
        }

        if enter.0 > exit.0 {
            return None;
        }

        // Starting outside of the frustum, the ray first crosses the latest entering plane.
        // Starting inside, it crosses the earliest exiting plane.
        let (toi, plane) = match enter {
            (toi, Some(plane)) => (toi, plane),
            (_, None) => (exit.0, exit.1?),
        };

        Some(RayIntersection::new(toi, -plane.normal))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Point, Vector};

    #[test]
    fn ray_enters_frustum_through_near_plane() {
        let frustum = Frustum::perspective(core::f64::consts::FRAC_PI_2, 1.0, 1.0, 10.0).unwrap();
        let hit = frustum
            .cast_ray(&Ray::new(Point::origin(), Vector::new(0.0, 0.0, 4.0)))
            .unwrap();

        assert_relative_eq!(hit.time_of_impact, 0.25);
        assert_relative_eq!(hit.normal, -Vector::z());
    }

    #[test]
    fn ray_inside_frustum_reports_exit() {
        let frustum = Frustum::perspective(core::f64::consts::FRAC_PI_2, 1.0, 1.0, 10.0).unwrap();
        let hit = frustum
            .cast_ray(&Ray::new(Point::new(0.0, 0.0, 5.0), Vector::new(0.0, 0.0, 10.0)))
            .unwrap();

        assert_relative_eq!(hit.time_of_impact, 0.5);
        assert_relative_eq!(hit.normal, Vector::z());

        let inside = Ray::new(Point::new(0.0, 0.0, 5.0), Vector::new(0.0, 0.0, 1.0));
        assert!(frustum.cast_ray(&inside).is_none());
    }
}
