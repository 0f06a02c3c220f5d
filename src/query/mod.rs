//! Non-persistent geometric queries between collision volumes.
//!
//! # General cases
//! The most general functions provided by this module are:
//!
//! * [`query::intersection_test()`] to determine if two volumes are overlapping or not.
//! * [`query::cast_volumes()`] to determine when a volume undergoing a translation first hits a
//!   stationary one.
//! * [`query::cast_point()`] to sweep a single point against a volume.
//!
//! Ray-casting and point-projection can be achieved by importing traits:
//!
//! * [`query::RayCast`] for ray-casting.
//! * [`query::PointQuery`] for point projection.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the specialized routines the general
//! dispatchers route to. They have the form `[operation]_[volume1]_[volume2]()` where
//! `[operation]` is either `intersection_test` or `cast`.
//!
//! [`query::intersection_test()`]: crate::query::intersection_test
//! [`query::cast_volumes()`]: crate::query::cast_volumes
//! [`query::cast_point()`]: crate::query::cast_point
//! [`query::RayCast`]: crate::query::RayCast
//! [`query::PointQuery`]: crate::query::PointQuery

pub use self::error::Unsupported;
pub use self::intersection_test::intersection_test;
pub use self::point::{PointProjection, PointQuery};
pub use self::ray::{Ray, RayCast, RayIntersection};
pub use self::shape_cast::{cast_point, cast_volumes, VolumeCastHit};

mod error;
mod intersection_test;
pub mod point;
mod ray;
pub mod sat;
mod shape_cast;

/// Queries dedicated to specific pairs of volumes.
pub mod details {
    pub use super::intersection_test::*;
    pub use super::ray::*;
    pub use super::shape_cast::*;
}
