//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayCast, RayIntersection};
pub use self::ray_sphere::ray_toi_with_sphere;
pub(crate) use self::ray_cylinder::quadratic_roots;

#[doc(hidden)]
pub mod ray;
mod ray_capsule;
mod ray_cuboid;
mod ray_cylinder;
mod ray_frustum;
mod ray_sphere;
mod ray_triangle;
