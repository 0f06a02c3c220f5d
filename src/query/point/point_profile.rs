//! Projections on the solids of revolution.
//!
//! Cylinders and capsules are handled in their 2D profile `(ρ, y)`, `ρ` being the distance of a
//! point to the local `y` axis of the volume.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{Capsule, Cylinder, VolumeBasis};
use na::{Point2, Vector2};

/// Signed projection of a point on the boundary of a cylinder or capsule.
#[derive(Copy, Clone, Debug)]
pub(crate) struct RevolvedProjection {
    /// Distance to the boundary, negative inside of the volume.
    pub signed_distance: Real,
    /// Closest boundary point, in world-space.
    pub point: Point<Real>,
    /// Outward unit normal of the boundary at `point`, in world-space.
    pub normal: Vector<Real>,
}

#[derive(Copy, Clone, Debug)]
struct ProfileProjection {
    signed_distance: Real,
    point: Point2<Real>,
    normal: Vector2<Real>,
}

fn to_profile(local: &Point<Real>) -> (Point2<Real>, Vector<Real>) {
    let radial = Vector::new(local.x, 0.0, local.z);
    let rho = radial.norm();
    let dir = if rho > DEFAULT_EPSILON {
        radial / rho
    } else {
        Vector::x()
    };

    (Point2::new(rho, local.y), dir)
}

fn lift(
    basis: &VolumeBasis,
    center: &Point<Real>,
    radial_dir: &Vector<Real>,
    proj: &ProfileProjection,
) -> RevolvedProjection {
    let local_point = Point::from(radial_dir * proj.point.x + Vector::y() * proj.point.y);
    let local_normal = radial_dir * proj.normal.x + Vector::y() * proj.normal.y;

    RevolvedProjection {
        signed_distance: proj.signed_distance,
        point: basis.point_to_world(center, &local_point),
        normal: basis.vector_to_world(&local_normal),
    }
}

fn project_on_disk_profile(
    q: &Point2<Real>,
    center: &Point2<Real>,
    radius: Real,
) -> ProfileProjection {
    let offset = q - center;
    let dist = offset.norm();
    let normal = if dist > DEFAULT_EPSILON {
        offset / dist
    } else {
        Vector2::x()
    };

    ProfileProjection {
        signed_distance: dist - radius,
        point: center + normal * radius,
        normal,
    }
}

fn closest_point_on_segment2(a: &Point2<Real>, b: &Point2<Real>, q: &Point2<Real>) -> Point2<Real> {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq <= DEFAULT_EPSILON {
        *a
    } else {
        a + ab * na::clamp(ab.dot(&(q - a)) / len_sq, 0.0, 1.0)
    }
}

/// Projects `pt` on the boundary of `cylinder`.
///
/// The profile of a tapered cylinder is a trapezoid. Its edge lying on the axis is not part of
/// the boundary.
pub(crate) fn project_on_cylinder(cylinder: &Cylinder, pt: &Point<Real>) -> RevolvedProjection {
    let basis = cylinder.basis();
    let local = basis.point_to_local(&cylinder.center, pt);
    let (q, radial_dir) = to_profile(&local);

    let h = cylinder.half_height();
    let (rt, rb) = (cylinder.top_radius(), cylinder.bottom_radius());
    let bottom_axis = Point2::new(0.0, -h);
    let bottom_rim = Point2::new(rb, -h);
    let top_rim = Point2::new(rt, h);
    let top_axis = Point2::new(0.0, h);

    let lateral_normal = Vector2::new(2.0 * h, rb - rt)
        .try_normalize(DEFAULT_EPSILON)
        .unwrap_or_else(Vector2::x);
    let edges = [
        (bottom_axis, bottom_rim, -Vector2::y()),
        (bottom_rim, top_rim, lateral_normal),
        (top_rim, top_axis, Vector2::y()),
    ];

    let mut best = None::<(Real, Point2<Real>, Vector2<Real>)>;
    for (a, b, normal) in &edges {
        let candidate = closest_point_on_segment2(a, b, &q);
        let dist = na::distance(&candidate, &q);
        if best.map(|(d, ..)| dist < d).unwrap_or(true) {
            best = Some((dist, candidate, *normal));
        }
    }

    let (dist, point, edge_normal) = best.unwrap_or((0.0, q, Vector2::x()));
    let inside = q.y.abs() <= h && q.x <= cylinder.radius_at(q.y);
    let proj = if inside {
        ProfileProjection {
            signed_distance: -dist,
            point,
            normal: edge_normal,
        }
    } else {
        ProfileProjection {
            signed_distance: dist,
            point,
            normal: (q - point)
                .try_normalize(DEFAULT_EPSILON)
                .unwrap_or(edge_normal),
        }
    };

    lift(basis, &cylinder.center, &radial_dir, &proj)
}

/// Projects `pt` on the boundary of `capsule`.
///
/// The profile is split in three regions by the lines normal to the segment tangent to both
/// end spheres: the bottom sphere, the tangent cone and the top sphere. A capsule with one
/// sphere swallowing the other is projected on that sphere alone.
pub(crate) fn project_on_capsule(capsule: &Capsule, pt: &Point<Real>) -> RevolvedProjection {
    let basis = capsule.basis();
    let local = basis.point_to_local(&capsule.center, pt);
    let (q, radial_dir) = to_profile(&local);

    let hh = capsule.half_height();
    let len = 2.0 * hh;
    let (r1, r2) = (capsule.bottom_radius(), capsule.top_radius());
    let bottom = Point2::new(0.0, -hh);
    let top = Point2::new(0.0, hh);

    let proj = if len <= DEFAULT_EPSILON || (r1 - r2).abs() >= len {
        if r1 >= r2 {
            project_on_disk_profile(&q, &bottom, r1)
        } else {
            project_on_disk_profile(&q, &top, r2)
        }
    } else {
        let b = (r1 - r2) / len;
        let a = (1.0 - b * b).sqrt();
        let rel = q - bottom;
        let k = rel.dot(&Vector2::new(-b, a));

        if k < 0.0 {
            project_on_disk_profile(&q, &bottom, r1)
        } else if k > a * len {
            project_on_disk_profile(&q, &top, r2)
        } else {
            let normal = Vector2::new(a, b);
            let signed_distance = rel.dot(&normal) - r1;
            ProfileProjection {
                signed_distance,
                point: q - normal * signed_distance,
                normal,
            }
        }
    };

    lift(basis, &capsule.center, &radial_dir, &proj)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cylinder_profile_distances() {
        let cylinder = Cylinder::new(Point::origin(), 1.0, 0.5);

        let side = project_on_cylinder(&cylinder, &Point::new(2.0, 0.0, 0.0));
        assert_relative_eq!(side.signed_distance, 1.5);
        assert_relative_eq!(side.normal, Vector::x());

        let above = project_on_cylinder(&cylinder, &Point::new(0.0, 3.0, 0.2));
        assert_relative_eq!(above.signed_distance, 2.0);
        assert_relative_eq!(above.point, Point::new(0.0, 1.0, 0.2));

        let inside = project_on_cylinder(&cylinder, &Point::new(0.0, 0.9, 0.0));
        assert_relative_eq!(inside.signed_distance, -0.1, epsilon = 1.0e-12);
        assert_relative_eq!(inside.normal, Vector::y());
    }

    #[test]
    fn tapered_capsule_profile_regions() {
        // Bottom sphere of radius 1 at y = -2, top sphere of radius 0.5 at y = 2.
        let capsule = Capsule::new_tapered(Point::origin(), 2.0, 0.5, 1.0);

        let below = project_on_capsule(&capsule, &Point::new(0.0, -4.0, 0.0));
        assert_relative_eq!(below.signed_distance, 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(below.normal, -Vector::y(), epsilon = 1.0e-12);

        let above = project_on_capsule(&capsule, &Point::new(0.0, 3.0, 0.0));
        assert_relative_eq!(above.signed_distance, 0.5, epsilon = 1.0e-12);

        let center = project_on_capsule(&capsule, &Point::origin());
        assert!(center.signed_distance < 0.0);
    }
}
