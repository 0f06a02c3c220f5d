use na::Unit;

use crate::math::{Real, Vector};
use crate::query::point::project_on_capsule;
use crate::query::{Ray, RayCast, VolumeCastHit};
use crate::shape::{Capsule, Sphere};
use crate::utils::DOUBLE_SAFE_EPSILON;

/// Time of impact of a sphere moving along `displacement` toward a stationary capsule.
///
/// The sphere center is cast as a ray against the capsule with both radii grown by the sphere
/// radius.
pub fn cast_sphere_capsule(
    sphere: &Sphere,
    displacement: &Vector<Real>,
    capsule: &Capsule,
) -> Option<VolumeCastHit> {
    let r = sphere.radius();
    let proj = project_on_capsule(capsule, &sphere.center);

    if proj.signed_distance <= r {
        return Some(VolumeCastHit::new(
            0.0,
            Unit::try_new(proj.normal, DOUBLE_SAFE_EPSILON),
        ));
    }

    let inflated = Capsule::new_tapered(
        capsule.center,
        capsule.half_height(),
        capsule.top_radius() + r,
        capsule.bottom_radius() + r,
    )
    .with_orientation(*capsule.orientation());

    inflated
        .cast_ray(&Ray::new(sphere.center, *displacement))
        .map(|hit| {
            VolumeCastHit::new(
                hit.time_of_impact,
                Unit::try_new(hit.normal, DOUBLE_SAFE_EPSILON),
            )
        })
}
