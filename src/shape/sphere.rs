use crate::math::{Point, Real, Vector};

/// A sphere volume.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    radius: Real,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius.
    ///
    /// Negative radii are clamped to zero.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Sphere {
        Sphere {
            center,
            radius: radius.max(0.0),
        }
    }

    /// The radius of this sphere.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Sets the radius of this sphere, clamped to zero.
    #[inline]
    pub fn set_radius(&mut self, radius: Real) {
        self.radius = radius.max(0.0);
    }

    /// Sets both the center and the radius.
    #[inline]
    pub fn set_all(&mut self, center: Point<Real>, radius: Real) {
        self.center = center;
        self.set_radius(radius);
    }

    /// Translates this sphere.
    #[inline]
    pub fn move_by(&mut self, offset: &Vector<Real>) {
        self.center += offset;
    }
}
