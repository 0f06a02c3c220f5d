//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::{Aabb, Containment};

#[doc(hidden)]
pub mod aabb;
mod bounding_volume_capsule;
mod bounding_volume_cuboid;
mod bounding_volume_cylinder;
mod bounding_volume_frustum;
mod bounding_volume_sphere;
mod bounding_volume_triangle;
