//! The oriented box volume.

use crate::math::{Point, Real, Rotation, Vector};
use crate::shape::{VolumeBasis, VolumeError};
use crate::utils::HALF_SIZE_TOLERANCE;

/// An oriented box volume.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The center of the box.
    pub center: Point<Real>,
    half_size: Vector<Real>,
    basis: VolumeBasis,
}

impl Cuboid {
    /// Creates a new axis-aligned box from its center and half-extents.
    ///
    /// Fails if any half-extent is negative.
    #[inline]
    pub fn new(center: Point<Real>, half_size: Vector<Real>) -> Result<Cuboid, VolumeError> {
        Self::with_orientation(center, half_size, Rotation::identity())
    }

    /// Creates a new box rotated by `orientation`.
    pub fn with_orientation(
        center: Point<Real>,
        half_size: Vector<Real>,
        orientation: Rotation<Real>,
    ) -> Result<Cuboid, VolumeError> {
        let basis = VolumeBasis::new(orientation);
        let mut result = Cuboid::new_unchecked(center, Vector::zeros(), basis);
        result.set_half_size(half_size)?;
        Ok(result)
    }

    /// Creates the axis-aligned box spanning `mins` to `maxs`.
    ///
    /// The bounds are reordered if necessary.
    pub fn from_extents(mins: &Point<Real>, maxs: &Point<Real>) -> Cuboid {
        let lo = mins.inf(maxs);
        let hi = mins.sup(maxs);
        Cuboid::new_unchecked(na::center(&lo, &hi), (hi - lo) * 0.5, VolumeBasis::identity())
    }

    #[inline]
    pub(crate) fn new_unchecked(
        center: Point<Real>,
        half_size: Vector<Real>,
        basis: VolumeBasis,
    ) -> Cuboid {
        Cuboid {
            center,
            half_size,
            basis,
        }
    }

    /// The half-extents of this box along its local axes.
    #[inline]
    pub fn half_size(&self) -> &Vector<Real> {
        &self.half_size
    }

    /// Sets the half-extents of this box.
    ///
    /// Components slightly below zero are clamped, anything more negative is rejected.
    pub fn set_half_size(&mut self, half_size: Vector<Real>) -> Result<(), VolumeError> {
        let invalid = half_size
            .iter()
            .find(|e| **e < -HALF_SIZE_TOLERANCE || !e.is_finite());

        if let Some(bad) = invalid {
            return Err(VolumeError::InvalidParameter {
                name: "half_size",
                value: *bad,
            });
        }

        self.half_size = half_size.map(|e| e.max(0.0));
        Ok(())
    }

    /// The orientation basis of this box.
    #[inline]
    pub fn basis(&self) -> &VolumeBasis {
        &self.basis
    }

    /// The orientation of this box.
    #[inline]
    pub fn orientation(&self) -> &Rotation<Real> {
        self.basis.orientation()
    }

    /// Is this box rotated away from the world axes?
    #[inline]
    pub fn is_oriented(&self) -> bool {
        self.basis.is_oriented()
    }

    /// Sets the orientation of this box.
    #[inline]
    pub fn set_orientation(&mut self, orientation: Rotation<Real>) {
        self.basis.set_orientation(orientation);
    }

    /// Resets this box to be axis-aligned.
    #[inline]
    pub fn clear_orientation(&mut self) {
        self.basis = VolumeBasis::identity();
    }

    /// Translates this box.
    #[inline]
    pub fn move_by(&mut self, offset: &Vector<Real>) {
        self.center += offset;
    }

    /// Expresses a world-space point in the local frame of this box.
    #[inline]
    pub fn world_to_local(&self, pt: &Point<Real>) -> Point<Real> {
        self.basis.point_to_local(&self.center, pt)
    }

    /// Maps a point from the local frame of this box to world-space.
    #[inline]
    pub fn local_to_world(&self, pt: &Point<Real>) -> Point<Real> {
        self.basis.point_to_world(&self.center, pt)
    }

    /// Expresses a world-space direction in the local frame of this box.
    #[inline]
    pub fn normal_world_to_local(&self, normal: &Vector<Real>) -> Vector<Real> {
        self.basis.vector_to_local(normal)
    }

    /// Maps a direction from the local frame of this box to world-space.
    #[inline]
    pub fn normal_local_to_world(&self, normal: &Vector<Real>) -> Vector<Real> {
        self.basis.vector_to_world(normal)
    }

    /// The eight corners of this box in world-space.
    pub fn corners(&self) -> [Point<Real>; 8] {
        let he = self.half_size;
        let mut result = [Point::origin(); 8];

        for (i, corner) in result.iter_mut().enumerate() {
            let local = Point::new(
                if i & 1 == 0 { -he.x } else { he.x },
                if i & 2 == 0 { -he.y } else { he.y },
                if i & 4 == 0 { -he.z } else { he.z },
            );
            *corner = self.local_to_world(&local);
        }

        result
    }

    /// Half-length of the projection of this box onto the world-space `axis`.
    #[inline]
    pub fn projected_radius(&self, axis: &Vector<Real>) -> Real {
        let axes = self.basis.axes();
        self.half_size.x * axes[0].dot(axis).abs()
            + self.half_size.y * axes[1].dot(axis).abs()
            + self.half_size.z * axes[2].dot(axis).abs()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_negative_half_size() {
        let err = Cuboid::new(Point::origin(), Vector::new(1.0, -0.5, 1.0));
        assert_eq!(
            err,
            Err(VolumeError::InvalidParameter {
                name: "half_size",
                value: -0.5
            })
        );

        let clamped = Cuboid::new(Point::origin(), Vector::new(1.0, -1.0e-7, 1.0)).unwrap();
        assert_eq!(clamped.half_size().y, 0.0);
    }

    #[test]
    fn from_extents_reorders_bounds() {
        let b = Cuboid::from_extents(&Point::new(1.0, -1.0, 4.0), &Point::new(-1.0, 3.0, 2.0));
        assert_eq!(b.center, Point::new(0.0, 1.0, 3.0));
        assert_eq!(*b.half_size(), Vector::new(1.0, 2.0, 1.0));
    }
}
