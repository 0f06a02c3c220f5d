use crate::shape::Capsule;
use crate::utils::segment_segment_closest_params;

/// Intersection test between two capsules.
///
/// Compares the distance between both axis segments with the radii interpolated at the closest
/// points.
pub fn intersection_test_capsule_capsule(capsule1: &Capsule, capsule2: &Capsule) -> bool {
    let (a1, b1) = (capsule1.bottom_center(), capsule1.top_center());
    let (a2, b2) = (capsule2.bottom_center(), capsule2.top_center());
    let (s, t) = segment_segment_closest_params((&a1, &b1), (&a2, &b2));

    let p1 = a1 + (b1 - a1) * s;
    let p2 = a2 + (b2 - a2) * t;
    let r = capsule1.radius_at_param(s) + capsule2.radius_at_param(t);

    na::distance_squared(&p1, &p2) <= r * r
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Point, Rotation, Vector};

    #[test]
    fn crossing_capsules() {
        let rot = Rotation::from_axis_angle(&Vector::x_axis(), core::f64::consts::FRAC_PI_2);
        let upright = Capsule::new(Point::origin(), 2.0, 0.5);
        let lying = Capsule::new(Point::new(0.9, 0.0, 0.0), 2.0, 0.5).with_orientation(rot);
        let away = Capsule::new(Point::new(1.1, 0.0, 0.0), 2.0, 0.5).with_orientation(rot);

        assert!(intersection_test_capsule_capsule(&upright, &lying));
        assert!(!intersection_test_capsule_capsule(&upright, &away));
    }
}
