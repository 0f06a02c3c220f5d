//! Various unsorted geometrical operators shared by the volume queries.

pub(crate) use self::consts::*;
pub use self::isometry_ops::IsometryOps;
pub use self::point_in_triangle::{point_in_triangle, point_in_triangle_with_normal};
pub use self::segment::{
    closest_point_on_ray, closest_point_on_segment, point_ray_distance, ray_plane,
    segment_segment_closest_params, segment_segment_distance,
};
pub use self::triangle_closest_point::{
    closest_point_on_triangle, closest_point_on_triangle_edge,
};

mod consts;
mod isometry_ops;
mod point_in_triangle;
mod segment;
mod triangle_closest_point;
