use na::Unit;

use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::details::*;
use crate::query::{PointQuery, Ray, RayCast, Unsupported};
use crate::shape::Volume;
use crate::utils::DISPLACEMENT_EPSILON;

/// The result of a volume sweep.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VolumeCastHit {
    /// The fraction of the displacement, in `[0, 1]`, at which the volumes first touch.
    pub time_of_impact: Real,
    /// The outward normal of the stationary volume at the contact.
    ///
    /// This may be `None` when the volumes already overlap and no meaningful direction exists.
    pub normal: Option<UnitVector<Real>>,
}

impl VolumeCastHit {
    /// Creates a new sweep result.
    #[inline]
    pub fn new(time_of_impact: Real, normal: Option<UnitVector<Real>>) -> Self {
        VolumeCastHit {
            time_of_impact,
            normal,
        }
    }

    /// The same hit with the roles of the moving and the stationary volume exchanged.
    #[inline]
    pub fn mirrored(self) -> Self {
        VolumeCastHit {
            time_of_impact: self.time_of_impact,
            normal: self.normal.map(|n| -n),
        }
    }
}

/// Answer of the pairings that can only detect an initial overlap.
#[inline]
fn cast_by_overlap(overlapping: bool, displacement: &Vector<Real>) -> Option<VolumeCastHit> {
    overlapping.then(|| VolumeCastHit::new(0.0, Unit::try_new(-displacement, DISPLACEMENT_EPSILON)))
}

/// Computes the time of impact of `moving`, translated by `displacement`, against the
/// stationary volume `stationary`.
///
/// Returns `Ok(None)` if both volumes never touch during the displacement. Swapping the roles of
/// both volumes gives the same time of impact for the opposite displacement, with the opposite
/// normal. Pairings without any specialized routine return `Err(Unsupported)`.
pub fn cast_volumes(
    moving: &Volume,
    displacement: &Vector<Real>,
    stationary: &Volume,
) -> Result<Option<VolumeCastHit>, Unsupported> {
    use Volume::*;

    let d = displacement;
    let result = match (moving, stationary) {
        (Sphere(s1), Sphere(s2)) => cast_sphere_sphere(s1, d, s2),
        (Sphere(s), Box(b)) => cast_sphere_cuboid(s, d, b),
        (Box(b), Sphere(s)) => cast_sphere_cuboid(s, &-d, b).map(VolumeCastHit::mirrored),
        (Sphere(s), Cylinder(c)) => cast_sphere_cylinder(s, d, c),
        (Cylinder(c), Sphere(s)) => cast_sphere_cylinder(s, &-d, c).map(VolumeCastHit::mirrored),
        (Sphere(s), Capsule(c)) => cast_sphere_capsule(s, d, c),
        (Capsule(c), Sphere(s)) => cast_sphere_capsule(s, &-d, c).map(VolumeCastHit::mirrored),
        (Sphere(s), Triangle(t)) => cast_sphere_triangle(s, d, t),
        (Triangle(t), Sphere(s)) => cast_sphere_triangle(s, &-d, t).map(VolumeCastHit::mirrored),
        (Box(b1), Box(b2)) => cast_cuboid_cuboid(b1, d, b2),
        (Box(b), Triangle(t)) => cast_cuboid_triangle(b, d, t),
        (Triangle(t), Box(b)) => cast_cuboid_triangle(b, &-d, t).map(VolumeCastHit::mirrored),
        (Sphere(s), Frustum(f)) | (Frustum(f), Sphere(s)) => {
            cast_by_overlap(intersection_test_sphere_frustum(s, f), d)
        }
        (Box(b), Frustum(f)) | (Frustum(f), Box(b)) => {
            cast_by_overlap(intersection_test_cuboid_frustum(b, f), d)
        }
        (Cylinder(c), Frustum(f)) | (Frustum(f), Cylinder(c)) => {
            cast_by_overlap(intersection_test_cylinder_frustum(c, f), d)
        }
        (Capsule(c1), Capsule(c2)) => cast_by_overlap(intersection_test_capsule_capsule(c1, c2), d),
        (Capsule(c), Frustum(f)) | (Frustum(f), Capsule(c)) => {
            cast_by_overlap(intersection_test_capsule_frustum(c, f), d)
        }
        (Box(_), Cylinder(_) | Capsule(_))
        | (Cylinder(_) | Capsule(_), Box(_))
        | (Cylinder(_), Cylinder(_) | Capsule(_) | Triangle(_))
        | (Capsule(_), Cylinder(_) | Triangle(_))
        | (Triangle(_), Cylinder(_) | Capsule(_) | Triangle(_) | Frustum(_))
        | (Frustum(_), Triangle(_) | Frustum(_)) => return Err(Unsupported),
    };

    Ok(result)
}

/// Sweeps `point` along `displacement` against `volume`.
///
/// A point starting inside of the volume hits it immediately, with the normal of the closest
/// boundary.
pub fn cast_point(
    volume: &Volume,
    point: &Point<Real>,
    displacement: &Vector<Real>,
) -> Option<VolumeCastHit> {
    if volume.contains_point(point) {
        let normal = Unit::try_new(volume.normal_at_point(point), DISPLACEMENT_EPSILON);
        return Some(VolumeCastHit::new(0.0, normal));
    }

    volume
        .cast_ray(&Ray::new(*point, *displacement))
        .map(|hit| VolumeCastHit::new(hit.time_of_impact, Unit::try_new(hit.normal, 0.0)))
}
