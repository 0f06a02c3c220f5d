use crate::math::{Point, Real, Vector};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::Capsule;

use super::ray_cylinder::{cone_band_crossings, keep_nearest, quadratic_roots};

/// Local crossings of a ray with a sphere, restricted to the points accepted by `on_boundary`.
fn sphere_crossings(
    origin: &Point<Real>,
    dir: &Vector<Real>,
    center: &Point<Real>,
    radius: Real,
    best: &mut Option<(Real, Vector<Real>)>,
    on_boundary: impl Fn(&Vector<Real>) -> bool,
) {
    let offset = origin - center;
    let a = dir.norm_squared();
    let b = 2.0 * dir.dot(&offset);
    let c = offset.norm_squared() - radius * radius;

    for toi in quadratic_roots(a, b, c) {
        let rel = origin + dir * toi - center;

        if on_boundary(&rel) {
            let normal = rel.try_normalize(0.0).unwrap_or_else(|| -dir.normalize());
            keep_nearest(best, toi, normal);
        }
    }
}

impl RayCast for Capsule {
    /// Tests the ray against both end spheres and the cone tangent to them.
    fn cast_ray(&self, ray: &Ray) -> Option<RayIntersection> {
        let basis = self.basis();
        let origin = basis.point_to_local(&self.center, &ray.origin);
        let dir = basis.vector_to_local(&ray.dir);

        if dir.norm_squared() == 0.0 {
            return None;
        }

        let hh = self.half_height();
        let len = 2.0 * hh;
        let (r1, r2) = (self.bottom_radius(), self.top_radius());
        let bottom = Point::new(0.0, -hh, 0.0);
        let top = Point::new(0.0, hh, 0.0);
        let mut best = None;

        if len <= 0.0 || (r1 - r2).abs() >= len {
            // One end sphere contains the other one.
            let (center, radius) = if r1 >= r2 { (bottom, r1) } else { (top, r2) };
            sphere_crossings(&origin, &dir, &center, radius, &mut best, |_| true);
        } else {
            let sin = (r1 - r2) / len;
            let cos = (1.0 - sin * sin).sqrt();

            sphere_crossings(&origin, &dir, &bottom, r1, &mut best, |rel| rel.y <= r1 * sin);
            sphere_crossings(&origin, &dir, &top, r2, &mut best, |rel| rel.y >= r2 * sin);

            let lower = (-hh + r1 * sin, r1 * cos);
            let upper = (hh + r2 * sin, r2 * cos);
            for (toi, normal) in cone_band_crossings(&origin, &dir, lower, upper) {
                keep_nearest(&mut best, toi, normal);
            }
        }

        best.map(|(toi, normal)| RayIntersection::new(toi, basis.vector_to_world(&normal)))
    }
}
