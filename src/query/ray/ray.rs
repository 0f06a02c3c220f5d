//! Traits and structure needed to cast rays.

use crate::math::{Isometry, Point, Real, Vector};

/// A ray spanning a finite segment.
///
/// The ray covers the points `origin + dir * t` for `t` in `[0, 1]`: the length of `dir` is the
/// length of the tested segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray, scaled to the length of the tested segment.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and spanning `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Transforms this ray by the given isometry.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(m * self.origin, m * self.dir)
    }

    /// Transforms this ray by the inverse of the given isometry.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m.inverse_transform_point(&self.origin),
            m.inverse_transform_vector(&self.dir),
        )
    }

    /// Translates this ray by the given vector. Its direction is left unchanged.
    #[inline]
    pub fn translate_by(&self, v: Vector<Real>) -> Self {
        Self::new(self.origin + v, self.dir)
    }

    /// Computes the point at the given parameter on this ray.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Structure containing the result of a successful ray cast.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RayIntersection {
    /// The fraction of the ray direction travelled before the hit, in `[0, 1]`.
    pub time_of_impact: Real,
    /// The outward unit normal of the volume at the hit point.
    pub normal: Vector<Real>,
}

impl RayIntersection {
    /// Creates a new `RayIntersection`.
    #[inline]
    pub fn new(time_of_impact: Real, normal: Vector<Real>) -> RayIntersection {
        RayIntersection {
            time_of_impact,
            normal,
        }
    }

    /// Transforms the normal of this intersection.
    #[inline]
    pub fn transform_by(&self, transform: &Isometry<Real>) -> Self {
        RayIntersection {
            time_of_impact: self.time_of_impact,
            normal: transform * self.normal,
        }
    }
}

/// Traits of volumes that can be tested against a ray.
///
/// A hit is the first crossing of the volume boundary along the ray. A ray starting inside of
/// a volume therefore reports the point where it leaves the volume.
pub trait RayCast {
    /// Computes the time of impact and normal between a ray and this volume.
    fn cast_ray(&self, ray: &Ray) -> Option<RayIntersection>;

    /// Computes the time of impact between a ray and this volume.
    #[inline]
    fn cast_ray_toi(&self, ray: &Ray) -> Option<Real> {
        self.cast_ray(ray).map(|inter| inter.time_of_impact)
    }

    /// Tests whether a ray crosses the boundary of this volume.
    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> bool {
        self.cast_ray(ray).is_some()
    }
}
