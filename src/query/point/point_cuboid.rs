use crate::math::{Point, Real, Vector};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Cuboid;
use crate::utils::DISPLACEMENT_EPSILON;

impl Cuboid {
    /// Clamps a point given in the local frame of this box to its extents.
    #[inline]
    pub(crate) fn clamp_local_point(&self, local: &Point<Real>) -> Point<Real> {
        let he = self.half_size();
        Point::from(local.coords.zip_map(he, |p, h| na::clamp(p, -h, h)))
    }

    /// The local outward normal of the face nearest to the local point `local`, which must lie
    /// inside of this box.
    pub(crate) fn nearest_local_face_normal(&self, local: &Point<Real>) -> Vector<Real> {
        let he = self.half_size();
        let mut best = 0;
        let mut best_gap = Real::MAX;

        for i in 0..3 {
            let gap = he[i] - local[i].abs();
            if gap < best_gap {
                best_gap = gap;
                best = i;
            }
        }

        let mut normal = Vector::zeros();
        normal[best] = if local[best] >= 0.0 { 1.0 } else { -1.0 };
        normal
    }
}

impl PointQuery for Cuboid {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let local = self.world_to_local(pt);
        let clamped = self.clamp_local_point(&local);

        if clamped == local {
            PointProjection::new(true, *pt)
        } else {
            PointProjection::new(false, self.local_to_world(&clamped))
        }
    }

    fn normal_at_point(&self, pt: &Point<Real>) -> Vector<Real> {
        let local = self.world_to_local(pt);
        let offset = local - self.clamp_local_point(&local);

        let normal = match offset.try_normalize(DISPLACEMENT_EPSILON) {
            Some(normal) => normal,
            None => {
                // On the surface: accumulate every face within tolerance so that edges and
                // corners get the averaged normal.
                let he = self.half_size();
                let mut normal = Vector::zeros();
                for i in 0..3 {
                    if local[i] - he[i] >= -DISPLACEMENT_EPSILON {
                        normal[i] = 1.0;
                    } else if local[i] + he[i] <= DISPLACEMENT_EPSILON {
                        normal[i] = -1.0;
                    }
                }

                normal
                    .try_normalize(0.0)
                    .unwrap_or_else(|| self.nearest_local_face_normal(&local))
            }
        };

        self.normal_local_to_world(&normal)
    }
}
