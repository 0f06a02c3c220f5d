use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::query::details::ray_toi_with_sphere;
use crate::query::{Ray, VolumeCastHit};
use crate::shape::{Sphere, Triangle};
use crate::utils::{closest_point_on_triangle, point_in_triangle_with_normal, DOUBLE_SAFE_EPSILON};

/// Time of impact of a sphere moving along `displacement` toward a stationary triangle.
///
/// The sphere center is cast against the triangle inflated by the sphere radius: two offset
/// copies of the face, a cylinder around each edge and a sphere around each corner.
pub fn cast_sphere_triangle(
    sphere: &Sphere,
    displacement: &Vector<Real>,
    triangle: &Triangle,
) -> Option<VolumeCastHit> {
    let r = sphere.radius();
    let [a, b, c] = triangle.corners();
    let center = sphere.center;
    let normal = *triangle.normal();
    let side = if triangle.signed_distance_to_plane(&center) >= 0.0 {
        1.0
    } else {
        -1.0
    };

    let closest = closest_point_on_triangle(a, b, c, &center);
    if na::distance_squared(&closest, &center) <= r * r {
        let n = (center - closest)
            .try_normalize(DOUBLE_SAFE_EPSILON)
            .unwrap_or(normal * side);
        return Some(VolumeCastHit::new(0.0, Unit::try_new(n, DOUBLE_SAFE_EPSILON)));
    }

    let ray = Ray::new(center, *displacement);
    let mut best: Option<Real> = None;
    let mut keep = |toi: Real| {
        if (0.0..=1.0).contains(&toi) && best.map(|b| toi < b).unwrap_or(true) {
            best = Some(toi);
        }
    };

    let rate = normal.dot(displacement) * side;
    if rate < -DOUBLE_SAFE_EPSILON {
        let toi = (r - triangle.signed_distance_to_plane(&center) * side) / rate;
        let on_plane = ray.point_at(toi) - normal * (side * r);
        if point_in_triangle_with_normal(&on_plane, a, b, c, &normal) {
            keep(toi);
        }
    }

    for (p0, p1) in [(a, b), (b, c), (c, a)] {
        if let Some(toi) = edge_cylinder_toi(p0, p1, r, &ray) {
            keep(toi);
        }
    }

    for corner in [a, b, c] {
        if let Some(toi) = ray_toi_with_sphere(corner, r, &ray) {
            keep(toi);
        }
    }

    let toi = best?;
    let hit = ray.point_at(toi);
    let n = (hit - closest_point_on_triangle(a, b, c, &hit))
        .try_normalize(DOUBLE_SAFE_EPSILON)
        .unwrap_or(normal * side);

    Some(VolumeCastHit::new(toi, Unit::try_new(n, DOUBLE_SAFE_EPSILON)))
}

/// Entry time of a ray into the cylinder of radius `r` around the segment `[p0, p1]`, when the
/// entry point lies between both caps.
fn edge_cylinder_toi(p0: &Point<Real>, p1: &Point<Real>, r: Real, ray: &Ray) -> Option<Real> {
    let axis = (p1 - p0).try_normalize(DOUBLE_SAFE_EPSILON)?;
    let len = na::distance(p0, p1);
    let offset = ray.origin - p0;
    let dp = ray.dir - axis * axis.dot(&ray.dir);
    let op = offset - axis * axis.dot(&offset);

    let qa = dp.norm_squared();
    let qb = 2.0 * op.dot(&dp);
    let qc = op.norm_squared() - r * r;

    if qa <= DOUBLE_SAFE_EPSILON || qc <= 0.0 {
        return None;
    }

    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return None;
    }

    let toi = (-qb - disc.sqrt()) / (2.0 * qa);
    let along = axis.dot(&(ray.point_at(toi) - p0));

    (along >= 0.0 && along <= len).then_some(toi)
}
