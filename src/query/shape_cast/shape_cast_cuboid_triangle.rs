use crate::math::{Real, Vector};
use crate::query::sat::{self, LinearSweep};
use crate::query::VolumeCastHit;
use crate::shape::{Cuboid, Triangle};

/// Time of impact of a box moving along `displacement` toward a stationary triangle.
pub fn cast_cuboid_triangle(
    cuboid: &Cuboid,
    displacement: &Vector<Real>,
    triangle: &Triangle,
) -> Option<VolumeCastHit> {
    let mut sweep = LinearSweep::new();

    for axis in sat::cuboid_triangle_candidate_axes(cuboid, triangle) {
        let proj1 = sat::cuboid_projection(cuboid, &axis);
        let proj2 = sat::triangle_projection(triangle, &axis);

        if !sweep.add_axis(&axis, &proj1, &proj2, displacement) {
            return None;
        }
    }

    sweep
        .result()
        .map(|(toi, normal)| VolumeCastHit::new(toi, normal))
}
