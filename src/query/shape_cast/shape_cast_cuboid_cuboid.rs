use crate::math::{Real, Vector};
use crate::query::sat::{self, LinearSweep};
use crate::query::VolumeCastHit;
use crate::shape::Cuboid;

/// Time of impact of a box moving along `displacement` toward a stationary box.
///
/// Both boxes keep their orientation during the motion, so the fifteen separating axes of their
/// initial configuration remain valid along the whole sweep.
pub fn cast_cuboid_cuboid(
    moving: &Cuboid,
    displacement: &Vector<Real>,
    stationary: &Cuboid,
) -> Option<VolumeCastHit> {
    let mut sweep = LinearSweep::new();

    for axis in sat::cuboid_cuboid_candidate_axes(moving, stationary) {
        let proj1 = sat::cuboid_projection(moving, &axis);
        let proj2 = sat::cuboid_projection(stationary, &axis);

        if !sweep.add_axis(&axis, &proj1, &proj2, displacement) {
            return None;
        }
    }

    sweep
        .result()
        .map(|(toi, normal)| VolumeCastHit::new(toi, normal))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Point, Rotation};

    #[test]
    fn box_slides_into_box() {
        let moving = Cuboid::new(Point::origin(), Vector::repeat(1.0)).unwrap();
        let stationary = Cuboid::new(Point::new(4.0, 0.5, 0.0), Vector::repeat(1.0)).unwrap();

        let hit = cast_cuboid_cuboid(&moving, &Vector::new(4.0, 0.0, 0.0), &stationary).unwrap();
        assert_relative_eq!(hit.time_of_impact, 0.5);
        assert_relative_eq!(hit.normal.unwrap().into_inner(), -Vector::x());

        assert!(cast_cuboid_cuboid(&moving, &Vector::new(1.0, 0.0, 0.0), &stationary).is_none());
        assert!(cast_cuboid_cuboid(&moving, &Vector::new(4.0, 8.0, 0.0), &stationary).is_none());
    }

    #[test]
    fn box_slides_into_rotated_box_corner() {
        let rot = Rotation::from_axis_angle(&Vector::z_axis(), core::f64::consts::FRAC_PI_4);
        let moving = Cuboid::new(Point::origin(), Vector::repeat(1.0)).unwrap();
        let stationary =
            Cuboid::with_orientation(Point::new(5.0, 0.0, 0.0), Vector::repeat(1.0), rot).unwrap();

        // The corner of the rotated box points toward the moving box, at x = 5 - sqrt(2).
        let hit = cast_cuboid_cuboid(&moving, &Vector::new(4.0, 0.0, 0.0), &stationary).unwrap();
        let expected = (4.0 - core::f64::consts::SQRT_2) / 4.0;
        assert_relative_eq!(hit.time_of_impact, expected, epsilon = 1.0e-9);
    }
}
