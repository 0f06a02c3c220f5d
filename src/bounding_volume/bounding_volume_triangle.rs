use crate::bounding_volume::Aabb;
use crate::shape::{Cuboid, Sphere, Triangle};

impl Triangle {
    /// The sphere centered on the barycenter of this triangle and passing through its farthest
    /// corner.
    pub fn enclosing_sphere(&self) -> Sphere {
        let center = self.center();
        let radius_sq = self
            .corners()
            .iter()
            .map(|c| na::distance_squared(c, &center))
            .fold(0.0, f64::max);

        Sphere::new(center, radius_sq.sqrt())
    }

    /// The axis-aligned box enclosing this triangle.
    #[inline]
    pub fn enclosing_box(&self) -> Cuboid {
        let aabb = self.aabb();
        Cuboid::from_extents(&aabb.mins, &aabb.maxs)
    }

    /// The world-space AABB of this triangle.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.corners())
    }
}
