//! Collision volumes supported by the narrow-phase.

pub use self::capsule::Capsule;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::frustum::{Frustum, FrustumPlane, Plane};
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;
#[doc(inline)]
pub use self::volume::{Volume, VolumeType};
pub use self::volume_basis::VolumeBasis;
pub use self::volume_error::VolumeError;

mod capsule;
mod cuboid;
mod cylinder;
mod frustum;
mod sphere;
mod triangle;
mod volume;
mod volume_basis;
mod volume_error;
