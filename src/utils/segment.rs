use crate::math::{Point, Real, Vector};
use crate::utils::DOUBLE_SAFE_EPSILON;

/// Computes the ray parameter at which the ray `origin + dir * t` crosses the plane passing
/// through `plane_point` with normal `plane_normal`.
///
/// Returns `None` if the ray is parallel to the plane.
#[inline]
pub fn ray_plane(
    plane_point: &Point<Real>,
    plane_normal: &Vector<Real>,
    origin: &Point<Real>,
    dir: &Vector<Real>,
) -> Option<Real> {
    let denom = plane_normal.dot(dir);

    if denom.abs() <= DOUBLE_SAFE_EPSILON {
        None
    } else {
        Some(plane_normal.dot(&(plane_point - origin)) / denom)
    }
}

/// Closest point to `point` on the segment `[a, b]`.
///
/// A degenerate segment returns `a`.
#[inline]
pub fn closest_point_on_segment(
    a: &Point<Real>,
    b: &Point<Real>,
    point: &Point<Real>,
) -> Point<Real> {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq <= DOUBLE_SAFE_EPSILON {
        return *a;
    }

    let lambda = ab.dot(&(point - a)) / len_sq;

    if lambda <= 0.0 {
        *a
    } else if lambda >= 1.0 {
        *b
    } else {
        a + ab * lambda
    }
}

/// Closest point to `point` on the infinite line through `origin` with unit direction `dir`.
#[inline]
pub fn closest_point_on_ray(
    origin: &Point<Real>,
    dir: &Vector<Real>,
    point: &Point<Real>,
) -> Point<Real> {
    origin + dir * dir.dot(&(point - origin))
}

/// Distance between `point` and the infinite line through `origin` with unit direction `dir`.
#[inline]
pub fn point_ray_distance(origin: &Point<Real>, dir: &Vector<Real>, point: &Point<Real>) -> Real {
    let offset = point - origin;
    (offset - dir * dir.dot(&offset)).norm()
}

/// Parameters `(s, t)` in `[0, 1]` of the closest points between the segments `seg1` and `seg2`.
#[inline]
pub fn segment_segment_closest_params(
    seg1: (&Point<Real>, &Point<Real>),
    seg2: (&Point<Real>, &Point<Real>),
) -> (Real, Real) {
    let d1 = seg1.1 - seg1.0;
    let d2 = seg2.1 - seg2.0;
    let r = seg1.0 - seg2.0;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let eps = DOUBLE_SAFE_EPSILON;

    if a <= eps && e <= eps {
        return (0.0, 0.0);
    }

    if a <= eps {
        return (0.0, na::clamp(f / e, 0.0, 1.0));
    }

    let c = d1.dot(&r);

    if e <= eps {
        return (na::clamp(-c / a, 0.0, 1.0), 0.0);
    }

    let b = d1.dot(&d2);
    let ae = a * e;
    let bb = b * b;
    let denom = ae - bb;

    // Parallel segments pick an arbitrary point of the first one.
    let mut s = if denom > eps && !ulps_eq!(ae, bb) {
        na::clamp((b * f - c * e) / denom, 0.0, 1.0)
    } else {
        0.0
    };

    let mut t = (b * s + f) / e;

    if t < 0.0 {
        t = 0.0;
        s = na::clamp(-c / a, 0.0, 1.0);
    } else if t > 1.0 {
        t = 1.0;
        s = na::clamp((b - c) / a, 0.0, 1.0);
    }

    (s, t)
}

/// Distance between the closest points of the segments `seg1` and `seg2`.
#[inline]
pub fn segment_segment_distance(
    seg1: (&Point<Real>, &Point<Real>),
    seg2: (&Point<Real>, &Point<Real>),
) -> Real {
    let (s, t) = segment_segment_closest_params(seg1, seg2);
    let p1 = seg1.0 + (seg1.1 - seg1.0) * s;
    let p2 = seg2.0 + (seg2.1 - seg2.0) * t;
    na::distance(&p1, &p2)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn crossing_segments_distance() {
        let a0 = Point::new(-1.0, 0.0, 0.0);
        let a1 = Point::new(1.0, 0.0, 0.0);
        let b0 = Point::new(0.0, -1.0, 2.0);
        let b1 = Point::new(0.0, 1.0, 2.0);

        let (s, t) = segment_segment_closest_params((&a0, &a1), (&b0, &b1));
        assert_relative_eq!(s, 0.5);
        assert_relative_eq!(t, 0.5);
        assert_relative_eq!(segment_segment_distance((&a0, &a1), (&b0, &b1)), 2.0);
    }

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);

        assert_eq!(closest_point_on_segment(&a, &b, &Point::new(-3.0, 1.0, 0.0)), a);
        assert_eq!(closest_point_on_segment(&a, &b, &Point::new(4.0, 1.0, 0.0)), b);
        assert_relative_eq!(
            closest_point_on_segment(&a, &b, &Point::new(0.25, 1.0, 0.0)),
            Point::new(0.25, 0.0, 0.0)
        );
    }

    #[test]
    fn parallel_ray_misses_plane() {
        let hit = ray_plane(
            &Point::origin(),
            &Vector::z(),
            &Point::new(0.0, 0.0, 1.0),
            &Vector::x(),
        );
        assert!(hit.is_none());
    }
}
