//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::intersection_test;
pub use self::intersection_test_capsule_capsule::intersection_test_capsule_capsule;
pub use self::intersection_test_cuboid_cuboid::intersection_test_cuboid_cuboid;
pub use self::intersection_test_cuboid_triangle::intersection_test_cuboid_triangle;
pub use self::intersection_test_frustum::{
    intersection_test_capsule_frustum, intersection_test_cuboid_frustum,
    intersection_test_cylinder_frustum, intersection_test_sphere_frustum,
};
pub use self::intersection_test_sphere_capsule::intersection_test_sphere_capsule;
pub use self::intersection_test_sphere_cuboid::intersection_test_sphere_cuboid;
pub use self::intersection_test_sphere_cylinder::intersection_test_sphere_cylinder;
pub use self::intersection_test_sphere_sphere::intersection_test_sphere_sphere;
pub use self::intersection_test_sphere_triangle::intersection_test_sphere_triangle;

mod intersection_test_capsule_capsule;
mod intersection_test_cuboid_cuboid;
mod intersection_test_cuboid_triangle;
mod intersection_test_frustum;
mod intersection_test_sphere_capsule;
mod intersection_test_sphere_cuboid;
mod intersection_test_sphere_cylinder;
mod intersection_test_sphere_sphere;
mod intersection_test_sphere_triangle;
