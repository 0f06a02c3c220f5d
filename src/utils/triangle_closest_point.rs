use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::utils::{closest_point_on_segment, point_in_triangle_with_normal};

/// Closest point to `p` located on one of the three edges of the triangle `(a, b, c)`.
pub fn closest_point_on_triangle_edge(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    p: &Point<Real>,
) -> Point<Real> {
    let candidates = [
        closest_point_on_segment(a, b, p),
        closest_point_on_segment(b, c, p),
        closest_point_on_segment(c, a, p),
    ];

    let mut best = candidates[0];
    let mut best_dist = na::distance_squared(&best, p);

    for candidate in &candidates[1..] {
        let dist = na::distance_squared(candidate, p);
        if dist < best_dist {
            best_dist = dist;
            best = *candidate;
        }
    }

    best
}

/// Closest point to `p` on the triangle `(a, b, c)`, interior included.
///
/// The point is projected onto the triangle plane. If the projection falls outside of the
/// triangle, the closest point on its edges is returned instead.
pub fn closest_point_on_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    p: &Point<Real>,
) -> Point<Real> {
    let normal = (b - a).cross(&(c - b));

    let Some(normal) = normal.try_normalize(DEFAULT_EPSILON) else {
        return closest_point_on_triangle_edge(a, b, c, p);
    };

    let projected = p - normal * (p - a).dot(&normal);

    if point_in_triangle_with_normal(&projected, a, b, c, &normal) {
        projected
    } else {
        closest_point_on_triangle_edge(a, b, c, p)
    }
}
