//! Application of the Separating-Axis-Theorem (SAT).
//!
//! Static tests look for an axis along which the projections of two volumes do not overlap.
//! Swept tests track, for every candidate axis, the time interval during which the projections
//! overlap along a linear displacement.

pub use self::sat_cuboid_cuboid::{
    cuboid_cuboid_candidate_axes, cuboid_cuboid_find_separation, cuboid_projection,
};
pub use self::sat_cuboid_triangle::{
    cuboid_triangle_candidate_axes, cuboid_triangle_find_separation, triangle_projection,
};
pub use self::sat_linear_sweep::{LinearSweep, ProjectionInterval};

mod sat_cuboid_cuboid;
mod sat_cuboid_triangle;
mod sat_linear_sweep;
