use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::shape::{Cuboid, Sphere};

impl Cuboid {
    /// The sphere centered on this box and passing through its corners.
    #[inline]
    pub fn enclosing_sphere(&self) -> Sphere {
        Sphere::new(self.center, self.half_size().norm())
    }

    /// The axis-aligned box enclosing this box.
    #[inline]
    pub fn enclosing_box(&self) -> Cuboid {
        let aabb = self.aabb();
        Cuboid::from_extents(&aabb.mins, &aabb.maxs)
    }

    /// The world-space AABB of this box.
    pub fn aabb(&self) -> Aabb {
        if !self.is_oriented() {
            return Aabb::from_half_extents(self.center, *self.half_size());
        }

        let axes = self.basis().axes();
        let he = self.half_size();
        let ws_half_extents: Vector<Real> =
            axes[0].abs() * he.x + axes[1].abs() * he.y + axes[2].abs() * he.z;

        Aabb::from_half_extents(self.center, ws_half_extents)
    }
}
