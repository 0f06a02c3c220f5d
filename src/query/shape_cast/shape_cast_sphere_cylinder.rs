use na::Unit;

use crate::math::{Real, Vector};
use crate::query::point::project_on_cylinder;
use crate::query::VolumeCastHit;
use crate::shape::{Cylinder, Sphere};
use crate::utils::{DOUBLE_SAFE_EPSILON, GEOMETRY_EPSILON};
use smallvec::SmallVec;

const MAX_GAP_EVALUATIONS: usize = 4096;

/// Time of impact of a sphere moving along `displacement` toward a stationary cylinder.
///
/// The gap between both volumes changes by at most `|displacement|` per unit of time. The
/// motion is split into intervals, visited earliest first. An interval is skipped once the
/// gap at its ends proves it contact-free. Its start is first advanced by the contact-free
/// span of its left gap.
pub fn cast_sphere_cylinder(
    sphere: &Sphere,
    displacement: &Vector<Real>,
    cylinder: &Cylinder,
) -> Option<VolumeCastHit> {
    let r = sphere.radius();
    let speed = displacement.norm();
    let gap_at = |t: Real| {
        let proj = project_on_cylinder(cylinder, &(sphere.center + displacement * t));
        (proj.signed_distance - r, proj.normal)
    };
    let contact = |t: Real, normal: Vector<Real>| {
        Some(VolumeCastHit::new(t, Unit::try_new(normal, DOUBLE_SAFE_EPSILON)))
    };

    let (gap0, normal0) = gap_at(0.0);

    if gap0 <= GEOMETRY_EPSILON {
        return contact(0.0, normal0);
    }

    if speed <= DOUBLE_SAFE_EPSILON {
        return None;
    }

    let mut evaluations = 2;
    let mut pending: SmallVec<[(Real, Real, Real, Real); 32]> = SmallVec::new();
    pending.push((0.0, gap0, 1.0, gap_at(1.0).0));

    while let Some((a, gap_a, b, gap_b)) = pending.pop() {
        let a = a + gap_a.max(0.0) / speed;

        if a >= b {
            if gap_b <= GEOMETRY_EPSILON {
                return contact(b, gap_at(b).1);
            }
            continue;
        }

        let (gap_a, normal_a) = gap_at(a);
        evaluations += 1;

        if gap_a <= GEOMETRY_EPSILON {
            return contact(a, normal_a);
        }

        // Lowest gap reachable between both ends.
        if (gap_a + gap_b - speed * (b - a)) / 2.0 > 0.0 {
            continue;
        }

        if evaluations >= MAX_GAP_EVALUATIONS {
            log::debug!("sphere-cylinder sweep out of evaluations, grazing contact assumed");
            return contact(a, normal_a);
        }

        let mid = (a + b) / 2.0;
        let gap_mid = gap_at(mid).0;
        evaluations += 1;
        pending.push((mid, gap_mid, b, gap_b));
        pending.push((a, gap_a, mid, gap_mid));
    }

    None
}
