//! Implementation details of the `cast_volumes` and `cast_point` functions.

pub use self::shape_cast::{cast_point, cast_volumes, VolumeCastHit};
pub use self::shape_cast_cuboid_cuboid::cast_cuboid_cuboid;
pub use self::shape_cast_cuboid_triangle::cast_cuboid_triangle;
pub use self::shape_cast_sphere_capsule::cast_sphere_capsule;
pub use self::shape_cast_sphere_cuboid::cast_sphere_cuboid;
pub use self::shape_cast_sphere_cylinder::cast_sphere_cylinder;
pub use self::shape_cast_sphere_sphere::cast_sphere_sphere;
pub use self::shape_cast_sphere_triangle::cast_sphere_triangle;

mod shape_cast;
mod shape_cast_cuboid_cuboid;
mod shape_cast_cuboid_triangle;
mod shape_cast_sphere_capsule;
mod shape_cast_sphere_cuboid;
mod shape_cast_sphere_cylinder;
mod shape_cast_sphere_sphere;
mod shape_cast_sphere_triangle;
