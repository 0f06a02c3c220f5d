use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::Triangle;
use crate::utils::{point_in_triangle_with_normal, ray_plane};

impl RayCast for Triangle {
    /// Intersects the ray with the triangle plane, then checks the hit point against the edges.
    ///
    /// A ray starting on the triangle plane does not hit it. The normal faces the ray origin.
    fn cast_ray(&self, ray: &Ray) -> Option<RayIntersection> {
        let [a, b, c] = self.corners();
        let normal = self.normal();
        let toi = ray_plane(a, normal, &ray.origin, &ray.dir)?;

        if toi <= 0.0 || toi > 1.0 {
            return None;
        }

        let hit = ray.point_at(toi);

        if !point_in_triangle_with_normal(&hit, a, b, c, normal) {
            return None;
        }

        let facing = if ray.dir.dot(normal) < 0.0 {
            *normal
        } else {
            -*normal
        };

        Some(RayIntersection::new(toi, facing))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Point, Vector};

    #[test]
    fn ray_hits_triangle_from_both_sides() {
        let tri = Triangle::new(
            Point::origin(),
            Point::new(2.0, 0.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
        )
        .unwrap();

        let above = tri
            .cast_ray(&Ray::new(Point::new(0.5, 0.5, 2.0), Vector::new(0.0, 0.0, -4.0)))
            .unwrap();
        assert_relative_eq!(above.time_of_impact, 0.5);
        assert_eq!(above.normal, Vector::z());

        let below = tri
            .cast_ray(&Ray::new(Point::new(0.5, 0.5, -1.0), Vector::new(0.0, 0.0, 4.0)))
            .unwrap();
        assert_relative_eq!(below.time_of_impact, 0.25);
        assert_eq!(below.normal, -Vector::z());

        let outside = Ray::new(Point::new(3.0, 3.0, 2.0), Vector::new(0.0, 0.0, -4.0));
        assert!(tri.cast_ray(&outside).is_none());
    }
}
