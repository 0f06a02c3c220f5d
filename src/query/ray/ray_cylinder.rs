use crate::math::{Point, Real, Vector};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::Cylinder;
use crate::utils::{DOUBLE_SAFE_EPSILON, RAY_PARALLEL_EPSILON};
use arrayvec::ArrayVec;

/// The real roots of `a * t² + b * t + c = 0`, in increasing order.
///
/// Degenerates to the linear equation when `a` vanishes.
pub(crate) fn quadratic_roots(a: Real, b: Real, c: Real) -> ArrayVec<Real, 2> {
    let mut roots = ArrayVec::new();

    if a.abs() <= DOUBLE_SAFE_EPSILON {
        if b.abs() > DOUBLE_SAFE_EPSILON {
            roots.push(-c / b);
        }
        return roots;
    }

    let disc = b * b - 4.0 * a * c;

    if disc >= 0.0 {
        let sqrt_disc = disc.sqrt();
        let (t0, t1) = ((-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a));
        roots.push(t0.min(t1));
        roots.push(t0.max(t1));
    }

    roots
}

/// Crossings of a local ray with the lateral surface of a cone section around the `y` axis.
///
/// The section spans the heights `y0` to `y1`, with radii `rho0` and `rho1` respectively.
/// Returns the unbounded ray parameters together with the local outward normals.
pub(crate) fn cone_band_crossings(
    origin: &Point<Real>,
    dir: &Vector<Real>,
    (y0, rho0): (Real, Real),
    (y1, rho1): (Real, Real),
) -> ArrayVec<(Real, Vector<Real>), 2> {
    let mut result = ArrayVec::new();

    if y1 - y0 <= DOUBLE_SAFE_EPSILON {
        return result;
    }

    // ρ(y) = m + k * y
    let k = (rho1 - rho0) / (y1 - y0);
    let m = rho0 - k * y0;
    let rho_origin = m + k * origin.y;

    let a = dir.x * dir.x + dir.z * dir.z - k * k * dir.y * dir.y;
    let b = 2.0 * (origin.x * dir.x + origin.z * dir.z - k * dir.y * rho_origin);
    let c = origin.x * origin.x + origin.z * origin.z - rho_origin * rho_origin;

    for t in quadratic_roots(a, b, c) {
        let p = origin + dir * t;

        if p.y < y0 || p.y > y1 || m + k * p.y < 0.0 {
            continue;
        }

        let normal = Vector::new(p.x, -k * (m + k * p.y), p.z);
        if let Some(normal) = normal.try_normalize(DOUBLE_SAFE_EPSILON) {
            result.push((t, normal));
        }
    }

    result
}

/// Records `(toi, normal)` into `best` if it lies within the ray and before the current best.
#[inline]
pub(crate) fn keep_nearest(
    best: &mut Option<(Real, Vector<Real>)>,
    toi: Real,
    normal: Vector<Real>,
) {
    if (0.0..=1.0).contains(&toi) && best.map(|(b, _)| toi < b).unwrap_or(true) {
        *best = Some((toi, normal));
    }
}

impl RayCast for Cylinder {
    /// Tests the ray against the lateral surface and both caps of the cylinder, tapered or not.
    fn cast_ray(&self, ray: &Ray) -> Option<RayIntersection> {
        let basis = self.basis();
        let origin = basis.point_to_local(&self.center, &ray.origin);
        let dir = basis.vector_to_local(&ray.dir);
        let h = self.half_height();
        let (rt, rb) = (self.top_radius(), self.bottom_radius());
        let mut best = None;

        for (toi, normal) in cone_band_crossings(&origin, &dir, (-h, rb), (h, rt)) {
            keep_nearest(&mut best, toi, normal);
        }

        if dir.y.abs() > RAY_PARALLEL_EPSILON {
            let caps = [(h, rt, Vector::y()), (-h, rb, -Vector::y())];

            for (y, radius, normal) in caps {
                let toi = (y - origin.y) / dir.y;
                let p = origin + dir * toi;

                if p.x * p.x + p.z * p.z <= radius * radius {
                    keep_nearest(&mut best, toi, normal);
                }
            }
        }

        best.map(|(toi, normal)| RayIntersection::new(toi, basis.vector_to_world(&normal)))
    }
}
