use crate::math::{Real, Vector};
use crate::query::sat::ProjectionInterval;
use crate::shape::Cuboid;
use crate::utils::GEOMETRY_EPSILON;
use arrayvec::ArrayVec;

/// The fifteen candidate separating axes of two boxes: the face normals of each box and the
/// cross products of their edge directions.
///
/// Cross products of nearly parallel edges are skipped. The returned axes are normalized.
pub fn cuboid_cuboid_candidate_axes(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
) -> ArrayVec<Vector<Real>, 15> {
    let axes1 = cuboid1.basis().axes();
    let axes2 = cuboid2.basis().axes();
    let mut result = ArrayVec::new();

    result.extend(axes1);
    result.extend(axes2);

    for a1 in &axes1 {
        for a2 in &axes2 {
            if let Some(axis) = a1.cross(a2).try_normalize(GEOMETRY_EPSILON) {
                result.push(axis);
            }
        }
    }

    result
}

/// Projection of a box onto the unit `axis`.
#[inline]
pub fn cuboid_projection(cuboid: &Cuboid, axis: &Vector<Real>) -> ProjectionInterval {
    ProjectionInterval::centered(cuboid.center.coords.dot(axis), cuboid.projected_radius(axis))
}

/// Finds an axis separating two boxes, if any.
///
/// Two axis-aligned boxes only need the three world axes.
pub fn cuboid_cuboid_find_separation(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
) -> Option<Vector<Real>> {
    if !cuboid1.is_oriented() && !cuboid2.is_oriented() {
        let dist = cuboid2.center - cuboid1.center;
        let limit = cuboid1.half_size() + cuboid2.half_size();

        return (0..3).find(|i| dist[*i].abs() > limit[*i]).map(|i| {
            let mut axis = Vector::zeros();
            axis[i] = 1.0;
            axis
        });
    }

    cuboid_cuboid_candidate_axes(cuboid1, cuboid2)
        .into_iter()
        .find(|axis| {
            cuboid_projection(cuboid1, axis).gap(&cuboid_projection(cuboid2, axis)) > 0.0
        })
}
