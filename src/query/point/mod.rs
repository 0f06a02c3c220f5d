//! Point inclusion and projection.

#[doc(inline)]
pub use self::point_query::{PointProjection, PointQuery};
pub(crate) use self::point_profile::{project_on_capsule, project_on_cylinder};

mod point_capsule;
mod point_cuboid;
mod point_cylinder;
mod point_frustum;
mod point_profile;
#[doc(hidden)]
pub mod point_query;
mod point_sphere;
mod point_triangle;
