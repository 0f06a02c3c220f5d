use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::query::VolumeCastHit;
use crate::shape::{Cuboid, Sphere};
use crate::utils::{DOUBLE_SAFE_EPSILON, GEOMETRY_EPSILON};

/// Time of impact of a sphere moving along `displacement` toward a stationary box.
///
/// The test runs in the local frame of the box, against the box inflated by the sphere radius.
/// The earliest entry among its 6 faces, 12 rounded edges and 8 rounded corners is kept. Each
/// candidate only counts if it lies in the region of the box owning that feature.
pub fn cast_sphere_cuboid(
    sphere: &Sphere,
    displacement: &Vector<Real>,
    cuboid: &Cuboid,
) -> Option<VolumeCastHit> {
    let r = sphere.radius();
    let he = cuboid.half_size();
    let p = cuboid.world_to_local(&sphere.center).coords;
    let clamped = cuboid.clamp_local_point(&Point::from(p));

    if na::distance_squared(&Point::from(p), &clamped) <= r * r {
        let normal = (p - clamped.coords)
            .try_normalize(GEOMETRY_EPSILON)
            .unwrap_or_else(|| cuboid.nearest_local_face_normal(&Point::from(p)));
        return Some(VolumeCastHit::new(0.0, to_world_normal(cuboid, &normal)));
    }

    let d = cuboid.normal_world_to_local(displacement);
    // Feature regions are widened so that hits on their shared borders are kept.
    let inner = he.add_scalar(DOUBLE_SAFE_EPSILON);
    let outer = he.add_scalar(-DOUBLE_SAFE_EPSILON);
    let mut best: Option<Real> = None;
    let mut keep = |toi: Real| {
        if best.map(|b| toi < b).unwrap_or(true) {
            best = Some(toi);
        }
    };

    for i in 0..3 {
        let (j, k) = ((i + 1) % 3, (i + 2) % 3);

        for s in [-1.0, 1.0] {
            // Face of normal `s * e_i`.
            let (pi, di) = (s * p[i], s * d[i]);
            if pi > he[i] + r && di < -DOUBLE_SAFE_EPSILON {
                let toi = (he[i] + r - pi) / di;
                let hit = p + d * toi;

                if toi <= 1.0 && hit[j].abs() <= inner[j] && hit[k].abs() <= inner[k] {
                    keep(toi);
                }
            }

            // Edges parallel to `e_i`, on the `s` side of the axis `j`.
            for t in [-1.0, 1.0] {
                let (cj, ck) = (s * p[j] - he[j], t * p[k] - he[k]);
                let (dj, dk) = (s * d[j], t * d[k]);
                let a = dj * dj + dk * dk;
                let b = 2.0 * (cj * dj + ck * dk);
                let c = cj * cj + ck * ck - r * r;

                if let Some(toi) = entry_time(a, b, c) {
                    let hit = p + d * toi;
                    let in_region = hit[i].abs() <= inner[i]
                        && s * hit[j] >= outer[j]
                        && t * hit[k] >= outer[k];

                    if in_region {
                        keep(toi);
                    }
                }
            }
        }
    }

    for corner in 0..8 {
        let signs = Vector::from_fn(|i, _| if corner & (1 << i) == 0 { -1.0 } else { 1.0 });
        let offset = p.component_mul(&signs) - he;
        let ds = d.component_mul(&signs);
        let c = offset.norm_squared() - r * r;

        if let Some(toi) = entry_time(ds.norm_squared(), 2.0 * offset.dot(&ds), c) {
            let hit = (p + d * toi).component_mul(&signs);
            if (0..3).all(|i| hit[i] >= outer[i]) {
                keep(toi);
            }
        }
    }

    let toi = best?;
    let hit = Point::from(p + d * toi);
    let normal = (hit - cuboid.clamp_local_point(&hit)).try_normalize(DOUBLE_SAFE_EPSILON)?;

    Some(VolumeCastHit::new(toi, to_world_normal(cuboid, &normal)))
}

/// The earliest time in `[0, 1]` at which `a t² + b t + c` becomes non-positive, if the
/// quadratic starts positive.
fn entry_time(a: Real, b: Real, c: Real) -> Option<Real> {
    if a <= DOUBLE_SAFE_EPSILON || c <= 0.0 {
        return None;
    }

    let disc = b * b - 4.0 * a * c;

    if disc < 0.0 {
        return None;
    }

    let toi = (-b - disc.sqrt()) / (2.0 * a);
    (0.0..=1.0).contains(&toi).then_some(toi)
}

#[inline]
fn to_world_normal(cuboid: &Cuboid, local: &Vector<Real>) -> Option<Unit<Vector<Real>>> {
    Unit::try_new(cuboid.normal_local_to_world(local), DOUBLE_SAFE_EPSILON)
}
