use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::{Cuboid, Frustum, Sphere};

impl Frustum {
    /// A sphere enclosing the eight corners of this frustum.
    ///
    /// Unbounded frustums yield a sphere of infinite radius.
    pub fn enclosing_sphere(&self) -> Sphere {
        match self.corners() {
            Some(corners) => {
                let center = Aabb::from_points(&corners).center();
                let radius_sq = corners
                    .iter()
                    .map(|c| na::distance_squared(c, &center))
                    .fold(0.0, Real::max);
                Sphere::new(center, radius_sq.sqrt())
            }
            None => Sphere::new(Point::origin(), Real::INFINITY),
        }
    }

    /// The axis-aligned box enclosing this frustum.
    #[inline]
    pub fn enclosing_box(&self) -> Cuboid {
        let aabb = self.aabb();
        Cuboid::from_extents(&aabb.mins, &aabb.maxs)
    }

    /// The world-space AABB of this frustum.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.corners()
            .map(|corners| Aabb::from_points(&corners))
            .unwrap_or_else(Aabb::new_infinite)
    }
}
