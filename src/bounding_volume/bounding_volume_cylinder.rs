use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::shape::{Cuboid, Cylinder, Sphere};

impl Cylinder {
    /// A sphere centered on this cylinder and enclosing both caps.
    ///
    /// Tapered cylinders use their largest radius, so the sphere is not tight.
    #[inline]
    pub fn enclosing_sphere(&self) -> Sphere {
        let hh = self.half_height();
        let r = self.max_radius();
        Sphere::new(self.center, (hh * hh + r * r).sqrt())
    }

    /// The axis-aligned box enclosing this cylinder.
    #[inline]
    pub fn enclosing_box(&self) -> Cuboid {
        let aabb = self.aabb();
        Cuboid::from_extents(&aabb.mins, &aabb.maxs)
    }

    /// The world-space AABB of this cylinder.
    pub fn aabb(&self) -> Aabb {
        let axis = self.axis();
        let hh = self.half_height();
        let (top, bottom) = (self.top_radius(), self.bottom_radius());

        // A cap disk of radius `r` with normal `axis` extends by `r * sqrt(1 - axis[i]²)`
        // along the i-th world axis.
        let disk_extent = |i: usize, r: Real| r * (1.0 - axis[i] * axis[i]).max(0.0).sqrt();
        let half_extents = Vector::from_fn(|i, _| {
            axis[i].abs() * hh + disk_extent(i, top).max(disk_extent(i, bottom))
        });

        Aabb::from_half_extents(self.center, half_extents)
    }
}
