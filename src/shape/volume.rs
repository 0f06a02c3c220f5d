use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::query::{
    self, PointProjection, PointQuery, Ray, RayCast, RayIntersection, VolumeCastHit,
};
use crate::shape::{
    Capsule, Cuboid, Cylinder, Frustum, Sphere, Triangle, VolumeBasis, VolumeError,
};
use crate::utils::DISPLACEMENT_EPSILON;
use na::Unit;
use num_derive::FromPrimitive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
/// Enum representing the type of a volume.
pub enum VolumeType {
    /// A sphere volume.
    Sphere = 0,
    /// An oriented box volume.
    Box,
    /// A possibly tapered cylinder volume.
    Cylinder,
    /// A possibly tapered capsule volume.
    Capsule,
    /// A triangle volume.
    Triangle,
    /// A frustum volume.
    Frustum,
}

/// A collision volume: one of the analytic shapes supported by the narrow-phase.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Volume {
    /// A sphere.
    Sphere(Sphere),
    /// An oriented box.
    Box(Cuboid),
    /// A possibly tapered cylinder.
    Cylinder(Cylinder),
    /// A possibly tapered capsule.
    Capsule(Capsule),
    /// A triangle.
    Triangle(Triangle),
    /// A frustum.
    Frustum(Frustum),
}

impl From<Sphere> for Volume {
    fn from(v: Sphere) -> Self {
        Volume::Sphere(v)
    }
}

impl From<Cuboid> for Volume {
    fn from(v: Cuboid) -> Self {
        Volume::Box(v)
    }
}

impl From<Cylinder> for Volume {
    fn from(v: Cylinder) -> Self {
        Volume::Cylinder(v)
    }
}

impl From<Capsule> for Volume {
    fn from(v: Capsule) -> Self {
        Volume::Capsule(v)
    }
}

impl From<Triangle> for Volume {
    fn from(v: Triangle) -> Self {
        Volume::Triangle(v)
    }
}

impl From<Frustum> for Volume {
    fn from(v: Frustum) -> Self {
        Volume::Frustum(v)
    }
}

impl Volume {
    /// The type of this volume.
    pub fn volume_type(&self) -> VolumeType {
        match self {
            Volume::Sphere(_) => VolumeType::Sphere,
            Volume::Box(_) => VolumeType::Box,
            Volume::Cylinder(_) => VolumeType::Cylinder,
            Volume::Capsule(_) => VolumeType::Capsule,
            Volume::Triangle(_) => VolumeType::Triangle,
            Volume::Frustum(_) => VolumeType::Frustum,
        }
    }

    /// Converts this volume to a sphere, if it is one.
    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            Volume::Sphere(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this volume to a box, if it is one.
    pub fn as_box(&self) -> Option<&Cuboid> {
        match self {
            Volume::Box(b) => Some(b),
            _ => None,
        }
    }

    /// Converts this volume to a cylinder, if it is one.
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        match self {
            Volume::Cylinder(c) => Some(c),
            _ => None,
        }
    }

    /// Converts this volume to a capsule, if it is one.
    pub fn as_capsule(&self) -> Option<&Capsule> {
        match self {
            Volume::Capsule(c) => Some(c),
            _ => None,
        }
    }

    /// Converts this volume to a triangle, if it is one.
    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Volume::Triangle(t) => Some(t),
            _ => None,
        }
    }

    /// Converts this volume to a frustum, if it is one.
    pub fn as_frustum(&self) -> Option<&Frustum> {
        match self {
            Volume::Frustum(f) => Some(f),
            _ => None,
        }
    }

    /// Tests whether this volume overlaps `other`.
    ///
    /// Pairings without a dedicated test are reported as not overlapping.
    pub fn overlaps(&self, other: &Volume) -> bool {
        query::intersection_test(self, other).unwrap_or(false)
    }

    /// Sweeps this volume along `displacement` against the stationary `other`.
    ///
    /// Returns `None` if no contact happens within the displacement, which corresponds to a
    /// time of impact of `1`. The returned normal is the outward normal of `other` at the
    /// contact.
    ///
    /// Volumes that already overlap yield a time of impact of `0`. Pairings without a dedicated
    /// sweep only report that initial overlap.
    pub fn sweep(&self, other: &Volume, displacement: &Vector<Real>) -> Option<VolumeCastHit> {
        let specialized = query::cast_volumes(self, displacement, other);

        if self.overlaps(other) {
            let normal = match specialized {
                Ok(Some(hit)) if hit.time_of_impact == 0.0 && hit.normal.is_some() => hit.normal,
                _ => Unit::try_new(-displacement, DISPLACEMENT_EPSILON),
            };
            return Some(VolumeCastHit::new(0.0, normal));
        }

        if displacement.norm() <= DISPLACEMENT_EPSILON {
            return None;
        }

        specialized.ok().flatten()
    }

    /// Same as [`Volume::sweep`] but only returns the time of impact, `1` meaning no contact.
    pub fn time_of_impact(&self, other: &Volume, displacement: &Vector<Real>) -> Real {
        self.sweep(other, displacement)
            .map(|hit| hit.time_of_impact)
            .unwrap_or(1.0)
    }

    /// Casts the segment starting at `origin` and spanning `direction` against this volume.
    pub fn ray_hits(
        &self,
        origin: &Point<Real>,
        direction: &Vector<Real>,
    ) -> Option<RayIntersection> {
        self.cast_ray(&Ray::new(*origin, *direction))
    }

    /// Sweeps a point along `displacement` against this volume.
    pub fn point_move_hits(
        &self,
        point: &Point<Real>,
        displacement: &Vector<Real>,
    ) -> Option<VolumeCastHit> {
        query::cast_point(self, point, displacement)
    }

    /// The bounding sphere of this volume.
    pub fn enclosing_sphere(&self) -> Sphere {
        match self {
            Volume::Sphere(s) => s.enclosing_sphere(),
            Volume::Box(b) => b.enclosing_sphere(),
            Volume::Cylinder(c) => c.enclosing_sphere(),
            Volume::Capsule(c) => c.enclosing_sphere(),
            Volume::Triangle(t) => t.enclosing_sphere(),
            Volume::Frustum(f) => f.enclosing_sphere(),
        }
    }

    /// The axis-aligned bounding box of this volume, as a box volume.
    pub fn enclosing_box(&self) -> Cuboid {
        match self {
            Volume::Sphere(s) => s.enclosing_box(),
            Volume::Box(b) => b.enclosing_box(),
            Volume::Cylinder(c) => c.enclosing_box(),
            Volume::Capsule(c) => c.enclosing_box(),
            Volume::Triangle(t) => t.enclosing_box(),
            Volume::Frustum(f) => f.enclosing_box(),
        }
    }

    /// The world-space AABB of this volume.
    pub fn aabb(&self) -> Aabb {
        match self {
            Volume::Sphere(s) => s.aabb(),
            Volume::Box(b) => b.aabb(),
            Volume::Cylinder(c) => c.aabb(),
            Volume::Capsule(c) => c.aabb(),
            Volume::Triangle(t) => t.aabb(),
            Volume::Frustum(f) => f.aabb(),
        }
    }

    /// Translates this volume.
    pub fn move_by(&mut self, offset: &Vector<Real>) {
        match self {
            Volume::Sphere(s) => s.move_by(offset),
            Volume::Box(b) => b.move_by(offset),
            Volume::Cylinder(c) => c.move_by(offset),
            Volume::Capsule(c) => c.move_by(offset),
            Volume::Triangle(t) => t.move_by(offset),
            Volume::Frustum(f) => f.move_by(offset),
        }
    }

    /// Maps this volume, expressed in a local frame scaled by `scale`, through `pos`.
    ///
    /// Non-uniform scales are applied exactly to box half-extents, cylinder and capsule heights,
    /// triangle corners and frustum planes. Radii use the largest absolute scale component of
    /// the directions they span.
    pub fn transform_by(
        &self,
        pos: &Isometry<Real>,
        scale: &Vector<Real>,
    ) -> Result<Volume, VolumeError> {
        let map_point = |pt: &Point<Real>| pos * Point::from(pt.coords.component_mul(scale));
        let abs_scale = scale.abs();
        let radial_scale = abs_scale.x.max(abs_scale.z);

        let result = match self {
            Volume::Sphere(s) => {
                Volume::Sphere(Sphere::new(map_point(&s.center), s.radius() * abs_scale.max()))
            }
            Volume::Box(b) => Volume::Box(Cuboid::new_unchecked(
                map_point(&b.center),
                b.half_size().component_mul(&abs_scale),
                VolumeBasis::new(pos.rotation * b.orientation()),
            )),
            Volume::Cylinder(c) => Volume::Cylinder(
                Cylinder::new_tapered(
                    map_point(&c.center),
                    c.half_height() * abs_scale.y,
                    c.top_radius() * radial_scale,
                    c.bottom_radius() * radial_scale,
                )
                .with_orientation(pos.rotation * c.orientation()),
            ),
            Volume::Capsule(c) => Volume::Capsule(
                Capsule::new_tapered(
                    map_point(&c.center),
                    c.half_height() * abs_scale.y,
                    c.top_radius() * radial_scale,
                    c.bottom_radius() * radial_scale,
                )
                .with_orientation(pos.rotation * c.orientation()),
            ),
            Volume::Triangle(t) => {
                let [a, b, c] = t.corners();
                Volume::Triangle(Triangle::new(map_point(a), map_point(b), map_point(c))?)
            }
            Volume::Frustum(f) => {
                if let Some(zero) = scale.iter().find(|s| **s == 0.0) {
                    return Err(VolumeError::InvalidParameter {
                        name: "scale",
                        value: *zero,
                    });
                }

                let mut planes = [(Vector::zeros(), 0.0); 6];
                for (out, plane) in planes.iter_mut().zip(f.planes().iter()) {
                    let normal = pos.rotation * plane.normal.component_div(scale);
                    *out = (normal, plane.distance - normal.dot(&pos.translation.vector));
                }
                Volume::Frustum(Frustum::new(planes)?)
            }
        };

        Ok(result)
    }
}

impl PointQuery for Volume {
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        match self {
            Volume::Sphere(s) => s.contains_point(pt),
            Volume::Box(b) => b.contains_point(pt),
            Volume::Cylinder(c) => c.contains_point(pt),
            Volume::Capsule(c) => c.contains_point(pt),
            Volume::Triangle(t) => t.contains_point(pt),
            Volume::Frustum(f) => f.contains_point(pt),
        }
    }

    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        match self {
            Volume::Sphere(s) => s.project_point(pt),
            Volume::Box(b) => b.project_point(pt),
            Volume::Cylinder(c) => c.project_point(pt),
            Volume::Capsule(c) => c.project_point(pt),
            Volume::Triangle(t) => t.project_point(pt),
            Volume::Frustum(f) => f.project_point(pt),
        }
    }

    fn normal_at_point(&self, pt: &Point<Real>) -> Vector<Real> {
        match self {
            Volume::Sphere(s) => s.normal_at_point(pt),
            Volume::Box(b) => b.normal_at_point(pt),
            Volume::Cylinder(c) => c.normal_at_point(pt),
            Volume::Capsule(c) => c.normal_at_point(pt),
            Volume::Triangle(t) => t.normal_at_point(pt),
            Volume::Frustum(f) => f.normal_at_point(pt),
        }
    }
}

impl RayCast for Volume {
    fn cast_ray(&self, ray: &Ray) -> Option<RayIntersection> {
        match self {
            Volume::Sphere(s) => s.cast_ray(ray),
            Volume::Box(b) => b.cast_ray(ray),
            Volume::Cylinder(c) => c.cast_ray(ray),
            Volume::Capsule(c) => c.cast_ray(ray),
            Volume::Triangle(t) => t.cast_ray(ray),
            Volume::Frustum(f) => f.cast_ray(ray),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num::FromPrimitive;

    #[test]
    fn volume_type_from_raw_tag() {
        assert_eq!(VolumeType::from_u8(1), Some(VolumeType::Box));
        assert_eq!(VolumeType::from_u8(5), Some(VolumeType::Frustum));
        assert_eq!(VolumeType::from_u8(6), None);
    }

    #[test]
    fn transform_scales_and_moves_box() {
        let cuboid = Cuboid::new(Point::new(1.0, 0.0, 0.0), Vector::repeat(1.0)).unwrap();
        let local = Volume::Box(cuboid);
        let pos = Isometry::translation(0.0, 5.0, 0.0);
        let world = local.transform_by(&pos, &Vector::new(2.0, 1.0, 3.0)).unwrap();
        let b = world.as_box().unwrap();

        assert_eq!(b.center, Point::new(2.0, 5.0, 0.0));
        assert_eq!(*b.half_size(), Vector::new(2.0, 1.0, 3.0));
    }

    #[test]
    fn resting_spheres_sweep_to_zero() {
        let a = Volume::Sphere(Sphere::new(Point::origin(), 1.0));
        let b = Volume::Sphere(Sphere::new(Point::new(1.5, 0.0, 0.0), 1.0));

        assert_eq!(a.time_of_impact(&b, &Vector::zeros()), 0.0);
        assert_eq!(a.time_of_impact(&b, &Vector::new(-3.0, 0.0, 0.0)), 0.0);
    }
}
