use crate::math::{Point, Real, Vector};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::Sphere;
use num::Zero;

impl RayCast for Sphere {
    #[inline]
    fn cast_ray(&self, ray: &Ray) -> Option<RayIntersection> {
        let toi = ray_toi_with_sphere(&self.center, self.radius(), ray)?;

        if toi > 1.0 {
            return None;
        }

        let normal = (ray.point_at(toi) - self.center)
            .try_normalize(0.0)
            .or_else(|| (-ray.dir).try_normalize(0.0))
            .unwrap_or_else(Vector::y);

        Some(RayIntersection::new(toi, normal))
    }
}

/// Computes the parameter of the first crossing of the ray with the surface of a sphere.
///
/// A ray starting inside of the sphere crosses the surface where it leaves it. The returned
/// parameter is not bounded by `1`.
#[inline]
pub fn ray_toi_with_sphere(center: &Point<Real>, radius: Real, ray: &Ray) -> Option<Real> {
    let dcenter = ray.origin - *center;

    let a = ray.dir.norm_squared();
    let b = dcenter.dot(&ray.dir);
    let c = dcenter.norm_squared() - radius * radius;

    // Special case for when the dir is zero.
    if a.is_zero() || (c > 0.0 && b > 0.0) {
        return None;
    }

    let delta = b * b - a * c;

    if delta < 0.0 {
        // no solution
        return None;
    }

    let sqrt_delta = delta.sqrt();
    let t = (-b - sqrt_delta) / a;

    if t >= 0.0 {
        Some(t)
    } else {
        // origin inside of the sphere
        Some((-b + sqrt_delta) / a)
    }
}
