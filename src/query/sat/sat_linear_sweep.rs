use crate::math::{Point, Real, UnitVector, Vector};
use crate::utils::DOUBLE_SAFE_EPSILON;
use na::Unit;

/// The extent of the projection of a volume onto an axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectionInterval {
    /// Smallest projected value.
    pub min: Real,
    /// Largest projected value.
    pub max: Real,
}

impl ProjectionInterval {
    /// The interval `[center - radius, center + radius]`.
    #[inline]
    pub fn centered(center: Real, radius: Real) -> Self {
        ProjectionInterval {
            min: center - radius,
            max: center + radius,
        }
    }

    /// The smallest interval containing the projections of all `points` onto `axis`.
    pub fn of_points(points: &[Point<Real>], axis: &Vector<Real>) -> Self {
        points.iter().fold(
            ProjectionInterval {
                min: Real::MAX,
                max: -Real::MAX,
            },
            |acc, pt| {
                let proj = pt.coords.dot(axis);
                ProjectionInterval {
                    min: acc.min.min(proj),
                    max: acc.max.max(proj),
                }
            },
        )
    }

    /// Signed gap between two intervals: positive when they are disjoint.
    #[inline]
    pub fn gap(&self, other: &Self) -> Real {
        (other.min - self.max).max(self.min - other.max)
    }
}

/// Linear separating-axis sweep.
///
/// Each candidate axis restricts the times at which the moving volume may touch the stationary
/// one. The earliest contact is the latest time at which an axis stops separating, provided no
/// axis separates again before it.
#[derive(Copy, Clone, Debug)]
pub struct LinearSweep {
    enter: Real,
    exit: Real,
    normal: Option<UnitVector<Real>>,
    separated: bool,
}

impl Default for LinearSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearSweep {
    /// Starts a sweep where every time is still possible.
    pub fn new() -> Self {
        LinearSweep {
            enter: -Real::MAX,
            exit: Real::MAX,
            normal: None,
            separated: false,
        }
    }

    /// Restricts the sweep with the candidate `axis`.
    ///
    /// `moving` and `stationary` are the projections of both volumes onto `axis` at the start of
    /// the motion. `axis` does not need to be normalized. Returns `false` once the sweep is known
    /// to miss, after which further axes can be skipped.
    pub fn add_axis(
        &mut self,
        axis: &Vector<Real>,
        moving: &ProjectionInterval,
        stationary: &ProjectionInterval,
        displacement: &Vector<Real>,
    ) -> bool {
        if self.separated {
            return false;
        }

        let rate = axis.dot(displacement);

        if rate.abs() <= DOUBLE_SAFE_EPSILON {
            if moving.gap(stationary) > 0.0 {
                self.separated = true;
            }
            return !self.separated;
        }

        // The moving interval approaches from below when `rate > 0`, and from above otherwise.
        let (enter, exit, side) = if rate > 0.0 {
            (
                (stationary.min - moving.max) / rate,
                (stationary.max - moving.min) / rate,
                -1.0,
            )
        } else {
            (
                (stationary.max - moving.min) / rate,
                (stationary.min - moving.max) / rate,
                1.0,
            )
        };

        if enter > self.enter {
            self.enter = enter;
            self.normal = Unit::try_new(axis * side, DOUBLE_SAFE_EPSILON);
        }

        self.exit = self.exit.min(exit);

        if self.enter > self.exit || self.enter > 1.0 || self.exit < 0.0 {
            self.separated = true;
        }

        !self.separated
    }

    /// The time of impact in `[0, 1]` and the outward normal of the stationary volume, if the
    /// volumes touch during the motion.
    pub fn result(&self) -> Option<(Real, Option<UnitVector<Real>>)> {
        if self.separated {
            None
        } else {
            Some((self.enter.max(0.0), self.normal))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sweep_along_single_axis() {
        let mut sweep = LinearSweep::new();
        let moving = ProjectionInterval::centered(0.0, 1.0);
        let stationary = ProjectionInterval::centered(5.0, 1.0);

        assert!(sweep.add_axis(&Vector::x(), &moving, &stationary, &Vector::new(6.0, 0.0, 0.0)));
        let (toi, normal) = sweep.result().unwrap();

        assert_relative_eq!(toi, 0.5);
        assert_eq!(normal.unwrap().into_inner(), -Vector::x());
    }

    #[test]
    fn separated_axis_without_motion_misses() {
        let mut sweep = LinearSweep::new();
        let moving = ProjectionInterval::centered(0.0, 1.0);
        let stationary = ProjectionInterval::centered(0.0, 1.0);
        let far = ProjectionInterval::centered(5.0, 1.0);
        let displacement = Vector::new(6.0, 0.0, 0.0);

        assert!(sweep.add_axis(&Vector::x(), &moving, &far, &displacement));
        assert!(!sweep.add_axis(&Vector::y(), &moving, &far, &displacement));
        assert!(sweep.result().is_none());

        let mut overlapping = LinearSweep::new();
        assert!(overlapping.add_axis(&Vector::y(), &moving, &stationary, &displacement));
        assert_eq!(overlapping.result().map(|r| r.0), Some(0.0));
    }
}
