use crate::math::{Point, Real, Rotation, Vector};
use crate::shape::VolumeBasis;
use crate::utils::GEOMETRY_EPSILON;

/// A capsule volume whose axis is the local `y` axis.
///
/// The capsule is the convex hull of two spheres centered at `±half_height` along its axis.
/// Both spheres may have different radii, in which case the capsule is tapered.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// The center of the capsule.
    pub center: Point<Real>,
    half_height: Real,
    top_radius: Real,
    bottom_radius: Real,
    basis: VolumeBasis,
}

impl Capsule {
    /// Creates a new axis-aligned capsule where both spheres have the same radius.
    #[inline]
    pub fn new(center: Point<Real>, half_height: Real, radius: Real) -> Capsule {
        Self::new_tapered(center, half_height, radius, radius)
    }

    /// Creates a new axis-aligned capsule with distinct top and bottom radii.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new_tapered(
        center: Point<Real>,
        half_height: Real,
        top_radius: Real,
        bottom_radius: Real,
    ) -> Capsule {
        Capsule {
            center,
            half_height: half_height.max(0.0),
            top_radius: top_radius.max(0.0),
            bottom_radius: bottom_radius.max(0.0),
            basis: VolumeBasis::identity(),
        }
    }

    /// Returns this capsule rotated by `orientation`.
    #[inline]
    pub fn with_orientation(mut self, orientation: Rotation<Real>) -> Capsule {
        self.basis.set_orientation(orientation);
        self
    }

    /// Half the distance between the centers of both spheres.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.half_height
    }

    /// Radius of the sphere on the positive side of the axis.
    #[inline]
    pub fn top_radius(&self) -> Real {
        self.top_radius
    }

    /// Radius of the sphere on the negative side of the axis.
    #[inline]
    pub fn bottom_radius(&self) -> Real {
        self.bottom_radius
    }

    /// The largest of both sphere radii.
    #[inline]
    pub fn max_radius(&self) -> Real {
        self.top_radius.max(self.bottom_radius)
    }

    /// Do both spheres have different radii?
    #[inline]
    pub fn is_tapered(&self) -> bool {
        (self.top_radius - self.bottom_radius).abs() > GEOMETRY_EPSILON
    }

    /// Sets the half height, clamped to zero.
    #[inline]
    pub fn set_half_height(&mut self, half_height: Real) {
        self.half_height = half_height.max(0.0);
    }

    /// Sets both radii to `radius`, clamped to zero.
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

    /// Radius interpolated along the segment, `t = 0` being the bottom sphere.
    #[inline]
    pub fn radius_at_param(&self, t: Real) -> Real {
        self.bottom_radius + (self.top_radius - self.bottom_radius) * na::clamp(t, 0.0, 1.0)
    }

    /// The orientation basis of this capsule.
    #[inline]
    pub fn basis(&self) -> &VolumeBasis {
        &self.basis
    }

    /// The orientation of this capsule.
    #[inline]
    pub fn orientation(&self) -> &Rotation<Real> {
        self.basis.orientation()
    }

    /// Sets the orientation of this capsule.
    #[inline]
    pub fn set_orientation(&mut self, orientation: Rotation<Real>) {
        self.basis.set_orientation(orientation);
    }

    /// The world-space direction of the axis, pointing toward the top sphere.
    #[inline]
    pub fn axis(&self) -> Vector<Real> {
        self.basis.axis(1)
    }

    /// Translates this capsule.
    #[inline]
    pub fn move_by(&mut self, offset: &Vector<Real>) {
        self.center += offset;
    }

    /// Center of the top sphere in world-space.
    #[inline]
    pub fn top_center(&self) -> Point<Real> {
        self.center + self.axis() * self.half_height
    }

    /// Center of the bottom sphere in world-space.
    #[inline]
    pub fn bottom_center(&self) -> Point<Real> {
        self.center - self.axis() * self.half_height
    }
}
