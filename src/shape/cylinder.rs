//! Support for tapered cylinders.

use crate::math::{Point, Real, Rotation, Vector};
use crate::shape::VolumeBasis;
use crate::utils::GEOMETRY_EPSILON;

/// A cylinder volume whose axis is the local `y` axis.
///
/// The top and bottom caps may have different radii, turning the cylinder into a truncated
/// cone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The center of the cylinder.
    pub center: Point<Real>,
    half_height: Real,
    top_radius: Real,
    bottom_radius: Real,
    basis: VolumeBasis,
}

impl Cylinder {
    /// Creates a new axis-aligned cylinder with equal cap radii.
    #[inline]
    pub fn new(center: Point<Real>, half_height: Real, radius: Real) -> Cylinder {
        Self::new_tapered(center, half_height, radius, radius)
    }

    /// Creates a new axis-aligned cylinder with distinct top and bottom radii.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new_tapered(
        center: Point<Real>,
        half_height: Real,
        top_radius: Real,
        bottom_radius: Real,
    ) -> Cylinder {
        Cylinder {
            center,
            half_height: half_height.max(0.0),
            top_radius: top_radius.max(0.0),
            bottom_radius: bottom_radius.max(0.0),
            basis: VolumeBasis::identity(),
        }
    }

    /// Returns this cylinder rotated by `orientation`.
    #[inline]
    pub fn with_orientation(mut self, orientation: Rotation<Real>) -> Cylinder {
        self.basis.set_orientation(orientation);
        self
    }

    /// Half the distance between the two caps.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.half_height
    }

    /// Radius of the cap on the positive side of the axis.
    #[inline]
    pub fn top_radius(&self) -> Real {
        self.top_radius
    }

    /// Radius of the cap on the negative side of the axis.
    #[inline]
    pub fn bottom_radius(&self) -> Real {
        self.bottom_radius
    }

    /// The largest of both cap radii.
    #[inline]
    pub fn max_radius(&self) -> Real {
        self.top_radius.max(self.bottom_radius)
    }

    /// Do the two caps have different radii?
    #[inline]
    pub fn is_tapered(&self) -> bool {
        (self.top_radius - self.bottom_radius).abs() > GEOMETRY_EPSILON
    }

    /// Sets the half height, clamped to zero.
    #[inline]
    pub fn set_half_height(&mut self, half_height: Real) {
        self.half_height = half_height.max(0.0);
    }

    /// Sets both cap radii to `radius`, clamped to zero.
    #[inline]
    pub fn set_radius(&mut self, radius: Real) {
        self.set_radii(radius, radius);
    }

    /// Sets the top and bottom radii, clamped to zero.
    #[inline]
    pub fn set_radii(&mut self, top_radius: Real, bottom_radius: Real) {
        self.top_radius = top_radius.max(0.0);
        self.bottom_radius = bottom_radius.max(0.0);
    }

    /// Radius of the cross-section at the local height `y`, clamped to the caps.
    #[inline]
    pub fn radius_at(&self, y: Real) -> Real {
        if self.half_height <= 0.0 {
            return self.max_radius();
        }

        let t = na::clamp((y + self.half_height) / (2.0 * self.half_height), 0.0, 1.0);
        self.bottom_radius + (self.top_radius - self.bottom_radius) * t
    }

    /// The orientation basis of this cylinder.
    #[inline]
    pub fn basis(&self) -> &VolumeBasis {
        &self.basis
    }

    /// The orientation of this cylinder.
    #[inline]
    pub fn orientation(&self) -> &Rotation<Real> {
        self.basis.orientation()
    }

    /// Sets the orientation of this cylinder.
    #[inline]
    pub fn set_orientation(&mut self, orientation: Rotation<Real>) {
        self.basis.set_orientation(orientation);
    }

    /// The world-space direction of the axis, pointing toward the top cap.
    #[inline]
    pub fn axis(&self) -> Vector<Real> {
        self.basis.axis(1)
    }

    /// Translates this cylinder.
    #[inline]
    pub fn move_by(&mut self, offset: &Vector<Real>) {
        self.center += offset;
    }

    /// Center of the top cap in world-space.
    #[inline]
    pub fn top_center(&self) -> Point<Real> {
        self.center + self.axis() * self.half_height
    }

    /// Center of the bottom cap in world-space.
    #[inline]
    pub fn bottom_center(&self) -> Point<Real> {
        self.center - self.axis() * self.half_height
    }
}
