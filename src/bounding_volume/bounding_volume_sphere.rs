use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::shape::{Cuboid, Sphere};

impl Sphere {
    /// The bounding sphere of this sphere: itself.
    #[inline]
    pub fn enclosing_sphere(&self) -> Sphere {
        *self
    }

    /// The axis-aligned box enclosing this sphere.
    #[inline]
    pub fn enclosing_box(&self) -> Cuboid {
        let aabb = self.aabb();
        Cuboid::from_extents(&aabb.mins, &aabb.maxs)
    }

    /// The world-space AABB of this sphere.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, Vector::<Real>::repeat(self.radius()))
    }
}
