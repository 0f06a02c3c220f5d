use crate::bounding_volume::Aabb;
use crate::math::{HomogeneousMatrix, Isometry, Point, Real, Rotation, Translation, Vector};
use crate::shape::Volume;
use crate::utils::DISPLACEMENT_EPSILON;
use crate::world::{
    CollisionGroups, CollisionTest, RegistryIndices, RigidBodyHandle, WorldError,
};
use alloc::vec::Vec;
use smallvec::SmallVec;

/// The handle of a collider inserted into a [`World`](crate::world::World).
///
/// Handles of removed colliders may be reused by colliders inserted later.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderHandle(pub(crate) usize);

impl ColliderHandle {
    /// The raw index of this handle.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// How a collider reacts to the simulation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResponseType {
    /// The collider never moves by itself.
    #[default]
    Static,
    /// The collider moves along its linear velocity and is stopped by what it hits.
    Kinematic,
    /// The collider is driven by its rigid body.
    Dynamic,
}

/// A volume of a collider, expressed in the collider frame or in the frame of one of its bones.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColliderShape {
    /// The volume in local space.
    pub volume: Volume,
    /// The bone the volume is attached to.
    pub bone: Option<usize>,
}

impl ColliderShape {
    /// A volume attached to the collider frame.
    pub fn new(volume: impl Into<Volume>) -> Self {
        Self {
            volume: volume.into(),
            bone: None,
        }
    }

    /// Attaches this volume to `bone`.
    pub fn with_bone(mut self, bone: usize) -> Self {
        self.bone = Some(bone);
        self
    }
}

/// A collision object of the world: a set of volumes moving together.
///
/// Most mutations of a collider inserted into a world must go through the world, which keeps
/// the registry lists up to date.
#[derive(Clone, Debug)]
pub struct Collider {
    pub(crate) handle: Option<ColliderHandle>,
    position: Point<Real>,
    orientation: Rotation<Real>,
    scale: Vector<Real>,
    matrix: HomogeneousMatrix<Real>,
    inverse_matrix: HomogeneousMatrix<Real>,
    groups: CollisionGroups,
    ignored: SmallVec<[ColliderHandle; 4]>,
    response_type: ResponseType,
    linear_velocity: Vector<Real>,
    rigid_body: Option<RigidBodyHandle>,
    shapes: SmallVec<[ColliderShape; 2]>,
    bone_transforms: Vec<Isometry<Real>>,
    world_volumes: Vec<Volume>,
    world_aabb: Aabb,
    breakable_constraints: bool,
    pub(crate) tests: Vec<CollisionTest>,
    pub(crate) registration: RegistryIndices,
    pub(crate) requires_update: bool,
    pub(crate) is_prepared: bool,
    pub(crate) body_sync_pending: bool,
    pub(crate) velocity_sync_pending: bool,
    pub(crate) predicted_displacement: Vector<Real>,
    /// Arbitrary data attached by the user.
    pub user_data: u128,
}

impl Collider {
    /// A static collider at the origin, made of `shapes`.
    pub fn new(shapes: impl IntoIterator<Item = ColliderShape>) -> Self {
        Self {
            handle: None,
            position: Point::origin(),
            orientation: Rotation::identity(),
            scale: Vector::repeat(1.0),
            matrix: HomogeneousMatrix::identity(),
            inverse_matrix: HomogeneousMatrix::identity(),
            groups: CollisionGroups::default(),
            ignored: SmallVec::new(),
            response_type: ResponseType::Static,
            linear_velocity: Vector::zeros(),
            rigid_body: None,
            shapes: shapes.into_iter().collect(),
            bone_transforms: Vec::new(),
            world_volumes: Vec::new(),
            world_aabb: Aabb::new_invalid(),
            breakable_constraints: false,
            tests: Vec::new(),
            registration: RegistryIndices::default(),
            requires_update: false,
            is_prepared: false,
            body_sync_pending: false,
            velocity_sync_pending: false,
            predicted_displacement: Vector::zeros(),
            user_data: 0,
        }
    }

    /// Sets the initial position.
    pub fn with_position(mut self, position: Point<Real>) -> Self {
        self.position = position;
        self.update_matrix();
        self
    }

    /// Sets the initial orientation.
    pub fn with_orientation(mut self, orientation: Rotation<Real>) -> Self {
        self.orientation = orientation;
        self.update_matrix();
        self
    }

    /// Sets the initial scale. Every component must be non-zero.
    pub fn with_scale(mut self, scale: Vector<Real>) -> Result<Self, WorldError> {
        let _ = self.set_scale(scale)?;
        Ok(self)
    }

    /// Sets the response type.
    pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    /// Sets the initial linear velocity.
    pub fn with_linear_velocity(mut self, velocity: Vector<Real>) -> Self {
        self.linear_velocity = velocity;
        self
    }

    /// Sets the collision groups.
    pub fn with_groups(mut self, groups: CollisionGroups) -> Self {
        self.groups = groups;
        self
    }

    /// Attaches a rigid body of the solver.
    pub fn with_rigid_body(mut self, body: RigidBodyHandle) -> Self {
        self.rigid_body = Some(body);
        self
    }

    /// Marks this collider as holding breakable constraints.
    pub fn with_breakable_constraints(mut self, breakable: bool) -> Self {
        self.breakable_constraints = breakable;
        self
    }

    /// Sets the bone transforms, relative to the collider frame.
    pub fn with_bone_transforms(mut self, bones: Vec<Isometry<Real>>) -> Self {
        self.bone_transforms = bones;
        self
    }

    /// Adds a collision test.
    pub fn with_collision_test(mut self, test: CollisionTest) -> Self {
        self.tests.push(test);
        self
    }

    /// The handle of this collider, once inserted into a world.
    #[inline]
    pub fn handle(&self) -> Option<ColliderHandle> {
        self.handle
    }

    /// The position of the collider origin.
    #[inline]
    pub fn position(&self) -> &Point<Real> {
        &self.position
    }

    /// The orientation of the collider.
    #[inline]
    pub fn orientation(&self) -> &Rotation<Real> {
        &self.orientation
    }

    /// The scale of the collider.
    #[inline]
    pub fn scale(&self) -> &Vector<Real> {
        &self.scale
    }

    /// The position and orientation of the collider, without its scale.
    #[inline]
    pub fn isometry(&self) -> Isometry<Real> {
        Isometry::from_parts(Translation::from(self.position.coords), self.orientation)
    }

    /// The local-to-world matrix, scale included.
    #[inline]
    pub fn matrix(&self) -> &HomogeneousMatrix<Real> {
        &self.matrix
    }

    /// The world-to-local matrix.
    #[inline]
    pub fn inverse_matrix(&self) -> &HomogeneousMatrix<Real> {
        &self.inverse_matrix
    }

    /// The collision groups.
    #[inline]
    pub fn groups(&self) -> CollisionGroups {
        self.groups
    }

    /// The colliders this collider never collides with.
    #[inline]
    pub fn ignored_colliders(&self) -> &[ColliderHandle] {
        &self.ignored
    }

    /// Does this collider ignore `other`?
    #[inline]
    pub fn ignores(&self, other: ColliderHandle) -> bool {
        self.ignored.contains(&other)
    }

    /// The response type.
    #[inline]
    pub fn response_type(&self) -> ResponseType {
        self.response_type
    }

    /// The linear velocity.
    #[inline]
    pub fn linear_velocity(&self) -> &Vector<Real> {
        &self.linear_velocity
    }

    /// The rigid body attached to this collider.
    #[inline]
    pub fn rigid_body(&self) -> Option<RigidBodyHandle> {
        self.rigid_body
    }

    /// The local volumes.
    #[inline]
    pub fn shapes(&self) -> &[ColliderShape] {
        &self.shapes
    }

    /// The bone transforms, relative to the collider frame.
    #[inline]
    pub fn bone_transforms(&self) -> &[Isometry<Real>] {
        &self.bone_transforms
    }

    /// The volumes in world space, as of the last bounds update.
    #[inline]
    pub fn world_volumes(&self) -> &[Volume] {
        &self.world_volumes
    }

    /// The world bounds of all the volumes, as of the last bounds update.
    #[inline]
    pub fn world_aabb(&self) -> &Aabb {
        &self.world_aabb
    }

    /// Does this collider hold breakable constraints?
    #[inline]
    pub fn has_breakable_constraints(&self) -> bool {
        self.breakable_constraints
    }

    /// The collision tests of this collider.
    #[inline]
    pub fn collision_tests(&self) -> &[CollisionTest] {
        &self.tests
    }

    /// The slots of this collider in the registry lists.
    #[inline]
    pub fn registration(&self) -> &RegistryIndices {
        &self.registration
    }

    /// Did the collider change since it was last prepared?
    #[inline]
    pub fn requires_update(&self) -> bool {
        self.requires_update
    }

    /// Has the collider been prepared in the current frame?
    #[inline]
    pub fn is_prepared(&self) -> bool {
        self.is_prepared
    }

    /// Is this collider moving by itself?
    ///
    /// Dynamic colliders always are. Kinematic colliders are when their velocity is not zero.
    pub fn is_moving(&self) -> bool {
        match self.response_type {
            ResponseType::Static => false,
            ResponseType::Kinematic => {
                self.linear_velocity.norm_squared() > DISPLACEMENT_EPSILON * DISPLACEMENT_EPSILON
            }
            ResponseType::Dynamic => true,
        }
    }

    /// Must this collider be prepared every frame?
    #[inline]
    pub fn auto_prepare(&self) -> bool {
        self.is_moving() || self.breakable_constraints
    }

    /// Must this collider be finished every frame?
    #[inline]
    pub fn auto_finish(&self) -> bool {
        self.is_moving() || self.breakable_constraints
    }

    /// Can this collider collide with `other`?
    ///
    /// Their groups must match and none may ignore the other.
    pub fn collides(&self, other: &Collider) -> bool {
        self.groups.test(other.groups)
            && !other.handle.is_some_and(|h| self.ignores(h))
            && !self.handle.is_some_and(|h| other.ignores(h))
    }

    /// The local-to-world matrix of the frame of `bone`, or of the collider if `bone` is `None`
    /// or out of range.
    pub fn bone_matrix(&self, bone: Option<usize>) -> HomogeneousMatrix<Real> {
        match bone.and_then(|b| self.bone_transforms.get(b)) {
            Some(pos) => self.matrix * pos.to_homogeneous(),
            None => self.matrix,
        }
    }

    /// Maps a volume expressed in the frame of `bone` to world space.
    pub fn volume_to_world(
        &self,
        volume: &Volume,
        bone: Option<usize>,
    ) -> Result<Volume, WorldError> {
        let local = match bone.and_then(|b| self.bone_transforms.get(b)) {
            Some(pos) => volume.transform_by(pos, &Vector::repeat(1.0))?,
            None => *volume,
        };
        Ok(local.transform_by(&self.isometry(), &self.scale)?)
    }

    pub(crate) fn set_isometry(&mut self, pos: &Isometry<Real>) -> bool {
        let position = Point::from(pos.translation.vector);
        if position == self.position && pos.rotation == self.orientation {
            return false;
        }

        self.position = position;
        self.orientation = pos.rotation;
        self.update_matrix();
        true
    }

    pub(crate) fn set_scale(&mut self, scale: Vector<Real>) -> Result<bool, WorldError> {
        if let Some(bad) = scale.iter().find(|s| **s == 0.0 || !s.is_finite()) {
            return Err(WorldError::InvalidParameter {
                name: "scale",
                value: *bad,
            });
        }

        let changed = scale != self.scale;
        self.scale = scale;
        self.update_matrix();
        Ok(changed)
    }

    pub(crate) fn set_groups(&mut self, groups: CollisionGroups) {
        self.groups = groups;
    }

    pub(crate) fn set_response_type(&mut self, response_type: ResponseType) {
        self.response_type = response_type;
    }

    pub(crate) fn set_linear_velocity(&mut self, velocity: Vector<Real>) {
        self.linear_velocity = velocity;
    }

    pub(crate) fn set_rigid_body(&mut self, body: Option<RigidBodyHandle>) {
        self.rigid_body = body;
    }

    pub(crate) fn set_breakable_constraints(&mut self, breakable: bool) {
        self.breakable_constraints = breakable;
    }

    pub(crate) fn set_shapes(&mut self, shapes: impl IntoIterator<Item = ColliderShape>) {
        self.shapes = shapes.into_iter().collect();
    }

    pub(crate) fn set_bone_transforms(&mut self, bones: Vec<Isometry<Real>>) {
        self.bone_transforms = bones;
    }

    pub(crate) fn add_ignored(&mut self, other: ColliderHandle) -> bool {
        if self.ignores(other) {
            false
        } else {
            self.ignored.push(other);
            true
        }
    }

    pub(crate) fn remove_ignored(&mut self, other: ColliderHandle) -> bool {
        let len = self.ignored.len();
        self.ignored.retain(|h| *h != other);
        self.ignored.len() != len
    }

    pub(crate) fn prepare_detection(&mut self, elapsed: Real) {
        self.requires_update = false;
        self.is_prepared = true;
        self.predicted_displacement = match self.response_type {
            ResponseType::Kinematic => self.linear_velocity * elapsed,
            _ => Vector::zeros(),
        };
    }

    /// Recomputes the world volumes and bounds from the local shapes.
    pub(crate) fn update_world_volumes(&mut self) -> Result<(), WorldError> {
        let world_volumes = self
            .shapes
            .iter()
            .map(|shape| self.volume_to_world(&shape.volume, shape.bone))
            .collect::<Result<Vec<_>, _>>()?;

        let mut aabb = Aabb::new_invalid();
        for volume in &world_volumes {
            aabb.merge(&volume.aabb());
        }

        self.world_volumes = world_volumes;
        self.world_aabb = aabb;
        Ok(())
    }

    // Translation * rotation * scale, so the scale applies first.
    fn update_matrix(&mut self) {
        let translation = HomogeneousMatrix::new_translation(&self.position.coords);
        let rotation = self.orientation.to_homogeneous();
        let inv_scale = self.scale.map(|s| 1.0 / s);

        self.matrix =
            translation * rotation * HomogeneousMatrix::new_nonuniform_scaling(&self.scale);
        self.inverse_matrix = HomogeneousMatrix::new_nonuniform_scaling(&inv_scale)
            * self.orientation.inverse().to_homogeneous()
            * HomogeneousMatrix::new_translation(&-self.position.coords);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::Sphere;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn matrix_applies_scale_rotation_translation() {
        let collider = Collider::new([])
            .with_position(Point::new(1.0, 2.0, 3.0))
            .with_orientation(Rotation::from_axis_angle(&Vector::z_axis(), FRAC_PI_2))
            .with_scale(Vector::new(2.0, 1.0, 1.0))
            .unwrap();

        let local = Point::new(1.0, 0.0, 0.0);
        let world = collider.matrix().transform_point(&local);
        assert_relative_eq!(world, Point::new(1.0, 4.0, 3.0), epsilon = 1.0e-9);
        assert_relative_eq!(
            collider.inverse_matrix().transform_point(&world),
            local,
            epsilon = 1.0e-9
        );
    }

    #[test]
    fn zero_scale_is_rejected() {
        assert!(Collider::new([]).with_scale(Vector::new(1.0, 0.0, 1.0)).is_err());
    }

    #[test]
    fn moving_colliders_auto_register() {
        let still = Collider::new([]).with_response_type(ResponseType::Kinematic);
        let moving = still.clone().with_linear_velocity(Vector::x());
        let breakable = Collider::new([]).with_breakable_constraints(true);

        assert!(!still.auto_prepare());
        assert!(moving.auto_prepare() && moving.auto_finish());
        assert!(breakable.auto_finish());
        assert!(Collider::new([]).with_response_type(ResponseType::Dynamic).is_moving());
    }

    #[test]
    fn world_volumes_follow_bones() {
        let shape = ColliderShape::new(Sphere::new(Point::origin(), 0.5)).with_bone(0);
        let mut collider = Collider::new([shape])
            .with_position(Point::new(10.0, 0.0, 0.0))
            .with_bone_transforms(vec![Isometry::translation(0.0, 1.0, 0.0)]);
        collider.update_world_volumes().unwrap();

        let center = collider.world_volumes()[0].as_sphere().map(|s| s.center);
        assert_eq!(center, Some(Point::new(10.0, 1.0, 0.0)));
        assert_relative_eq!(collider.world_aabb().mins, Point::new(9.5, 0.5, -0.5));
    }
}
