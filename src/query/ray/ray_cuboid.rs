use crate::math::{Real, Vector};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::Cuboid;
use crate::utils::RAY_PARALLEL_EPSILON;

impl RayCast for Cuboid {
    /// Tests the ray against the six faces of the box, in its local frame.
    fn cast_ray(&self, ray: &Ray) -> Option<RayIntersection> {
        let origin = self.world_to_local(&ray.origin);
        let dir = self.normal_world_to_local(&ray.dir);
        let he = self.half_size();
        let mut best: Option<(Real, Vector<Real>)> = None;

        for i in 0..3 {
            if dir[i].abs() <= RAY_PARALLEL_EPSILON {
                continue;
            }

            let (j, k) = ((i + 1) % 3, (i + 2) % 3);

            for side in [1.0, -1.0] {
                let toi = (side * he[i] - origin[i]) / dir[i];

                if !(0.0..=1.0).contains(&toi) || best.is_some_and(|(b, _)| toi >= b) {
                    continue;
                }

                let hit = origin + dir * toi;

                if hit[j].abs() <= he[j] && hit[k].abs() <= he[k] {
                    let mut normal = Vector::zeros();
                    normal[i] = side;
                    best = Some((toi, normal));
                }
            }
        }

        best.map(|(toi, normal)| RayIntersection::new(toi, self.normal_local_to_world(&normal)))
    }
}
