use na::Unit;

use crate::math::{Real, Vector};
use crate::query::details::ray_toi_with_sphere;
use crate::query::{Ray, VolumeCastHit};
use crate::shape::Sphere;
use crate::utils::DOUBLE_SAFE_EPSILON;

/// Time of impact of a sphere moving along `displacement` toward a stationary sphere.
///
/// The moving center is cast as a ray against a sphere whose radius is the sum of both radii.
pub fn cast_sphere_sphere(
    moving: &Sphere,
    displacement: &Vector<Real>,
    stationary: &Sphere,
) -> Option<VolumeCastHit> {
    let radius = moving.radius() + stationary.radius();
    let offset = moving.center - stationary.center;

    if offset.norm_squared() <= radius * radius {
        let normal = Unit::try_new(offset, DOUBLE_SAFE_EPSILON);
        return Some(VolumeCastHit::new(0.0, normal));
    }

    let ray = Ray::new(moving.center, *displacement);
    let toi = ray_toi_with_sphere(&stationary.center, radius, &ray)?;

    if toi > 1.0 {
        return None;
    }

    let normal = Unit::try_new(ray.point_at(toi) - stationary.center, DOUBLE_SAFE_EPSILON);
    Some(VolumeCastHit::new(toi, normal))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point;

    #[test]
    fn head_on_spheres() {
        let moving = Sphere::new(Point::origin(), 1.0);
        let stationary = Sphere::new(Point::new(5.0, 0.0, 0.0), 1.0);

        let hit = cast_sphere_sphere(&moving, &Vector::new(10.0, 0.0, 0.0), &stationary).unwrap();
        assert_relative_eq!(hit.time_of_impact, 0.3);
        assert_relative_eq!(hit.normal.unwrap().into_inner(), -Vector::x());

        assert!(cast_sphere_sphere(&moving, &Vector::new(2.0, 0.0, 0.0), &stationary).is_none());
        assert!(cast_sphere_sphere(&moving, &Vector::new(0.0, 10.0, 0.0), &stationary).is_none());
    }
}
