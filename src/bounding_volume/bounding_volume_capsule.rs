use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::shape::{Capsule, Cuboid, Sphere};

impl Capsule {
    /// A sphere centered on this capsule and enclosing both end spheres.
    #[inline]
    pub fn enclosing_sphere(&self) -> Sphere {
        Sphere::new(self.center, self.half_height() + self.max_radius())
    }

    /// The axis-aligned box enclosing this capsule.
    #[inline]
    pub fn enclosing_box(&self) -> Cuboid {
        let aabb = self.aabb();
        Cuboid::from_extents(&aabb.mins, &aabb.maxs)
    }

    /// The world-space AABB of this capsule.
    pub fn aabb(&self) -> Aabb {
        let top = Aabb::from_half_extents(
            self.top_center(),
            Vector::<Real>::repeat(self.top_radius()),
        );
        let bottom = Aabb::from_half_extents(
            self.bottom_center(),
            Vector::<Real>::repeat(self.bottom_radius()),
        );

        top.merged(&bottom)
    }
}
