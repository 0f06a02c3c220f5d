use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use crate::world::{
    Collider, ColliderHandle, ColliderRegistry, ColliderShape, CollisionGroups, CollisionTest,
    DebugContext, NullSolver, RegistryList, ResponseType, RigidBodyHandle, RigidBodySolver,
    TouchSensor, TouchSensorHandle, WorldConfig, WorldError,
};
use alloc::boxed::Box;
use alloc::vec::Vec;
use slab::Slab;

/// The colliders and touch sensors of a physics world, and the registry scheduling them.
///
/// Every frame, [`World::process_physics`] runs the detection pipeline over the colliders
/// registered in the four registry lists.
pub struct World {
    pub(crate) config: WorldConfig,
    pub(crate) colliders: Slab<Collider>,
    pub(crate) touch_sensors: Slab<TouchSensor>,
    pub(crate) registry: ColliderRegistry,
    pub(crate) solver: Box<dyn RigidBodySolver>,
    pub(crate) debug: DebugContext,
    pub(crate) processing_physics: bool,
    pub(crate) in_frame: bool,
    pub(crate) prepare_process_count: usize,
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl World {
    /// A world without rigid-body solver.
    pub fn new(config: WorldConfig) -> Self {
        Self::with_solver(config, NullSolver)
    }

    /// A world driving the rigid-body solver `solver`.
    pub fn with_solver(config: WorldConfig, solver: impl RigidBodySolver + 'static) -> Self {
        Self {
            debug: DebugContext::new(config.debug_enabled),
            config,
            colliders: Slab::new(),
            touch_sensors: Slab::new(),
            registry: ColliderRegistry::new(),
            solver: Box::new(solver),
            processing_physics: false,
            in_frame: false,
            prepare_process_count: 0,
        }
    }

    /// The pipeline parameters.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Mutable reference to the pipeline parameters.
    pub fn config_mut(&mut self) -> &mut WorldConfig {
        &mut self.config
    }

    /// The diagnostics of the pipeline.
    pub fn debug(&self) -> &DebugContext {
        &self.debug
    }

    /// Mutable reference to the diagnostics of the pipeline.
    pub fn debug_mut(&mut self) -> &mut DebugContext {
        &mut self.debug
    }

    /// The rigid-body solver.
    pub fn solver(&self) -> &dyn RigidBodySolver {
        &*self.solver
    }

    /// Mutable reference to the rigid-body solver.
    pub fn solver_mut(&mut self) -> &mut dyn RigidBodySolver {
        &mut *self.solver
    }

    /// Is the solver between preparation and the end of its step?
    ///
    /// Collider transforms changed meanwhile reach their rigid body only once the step is
    /// over.
    pub fn is_processing_physics(&self) -> bool {
        self.processing_physics
    }

    /// The collider registry.
    pub fn registry(&self) -> &ColliderRegistry {
        &self.registry
    }

    /// Checks that every registry slot and the index stored by its collider agree.
    pub fn registry_is_consistent(&self) -> bool {
        let slots_match = RegistryList::ALL.iter().all(|list| {
            let entries = self.registry.list(*list);
            (0..entries.len()).all(|i| match entries.get(i) {
                Some(handle) => self
                    .colliders
                    .get(handle.0)
                    .is_some_and(|c| c.registration.get(*list) == Some(i)),
                None => true,
            })
        });

        let indices_match = self.colliders.iter().all(|(key, collider)| {
            RegistryList::ALL.iter().all(|list| match collider.registration.get(*list) {
                Some(i) => self.registry.get(*list, i) == Some(ColliderHandle(key)),
                None => true,
            })
        });

        slots_match && indices_match
    }

    /*
     * Colliders.
     */
    /// Inserts a collider.
    ///
    /// The collider is registered for preparation, finish and a bounds update, and for
    /// post-physics tests if it has collision tests.
    pub fn insert_collider(
        &mut self,
        mut collider: Collider,
    ) -> Result<ColliderHandle, WorldError> {
        collider.update_world_volumes()?;

        let entry = self.colliders.vacant_entry();
        let handle = ColliderHandle(entry.key());
        collider.handle = Some(handle);
        collider.registration = Default::default();
        let collider = entry.insert(collider);

        for list in [
            RegistryList::Prepare,
            RegistryList::Finish,
            RegistryList::OctreeUpdate,
        ] {
            let _ = self.registry.register(list, handle, &mut collider.registration);
        }

        if !collider.tests.is_empty() {
            let _ = self.registry.register(
                RegistryList::PostPhysicsTest,
                handle,
                &mut collider.registration,
            );
        }

        if let Some(body) = collider.rigid_body() {
            self.solver.set_body_transform(body, &collider.isometry());
        }

        Ok(handle)
    }

    /// Removes a collider, unregistering it from every list and every touch sensor.
    ///
    /// No leave event is emitted for the touch sensors it was touching.
    pub fn remove_collider(&mut self, handle: ColliderHandle) -> Result<Collider, WorldError> {
        let mut collider = self
            .colliders
            .try_remove(handle.0)
            .ok_or(WorldError::InvalidCollider(handle))?;

        for list in RegistryList::ALL {
            let _ = self.registry.unregister(list, handle, &mut collider.registration);
        }

        for (_, sensor) in self.touch_sensors.iter_mut() {
            sensor.forget(handle);
        }

        for (_, other) in self.colliders.iter_mut() {
            let _ = other.remove_ignored(handle);
        }

        collider.handle = None;
        Ok(collider)
    }

    /// The collider identified by `handle`.
    pub fn collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(handle.0)
    }

    /// Iterates through all the colliders.
    pub fn colliders(&self) -> impl Iterator<Item = (ColliderHandle, &Collider)> {
        self.colliders
            .iter()
            .map(|(key, collider)| (ColliderHandle(key), collider))
    }

    /// The number of colliders.
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    fn collider_entry(&mut self, handle: ColliderHandle) -> Result<&mut Collider, WorldError> {
        self.colliders
            .get_mut(handle.0)
            .ok_or(WorldError::InvalidCollider(handle))
    }

    /// Can `a` and `b` collide, according to their groups and ignore lists?
    pub fn colliders_collide(&self, a: ColliderHandle, b: ColliderHandle) -> bool {
        match (self.collider(a), self.collider(b)) {
            (Some(a), Some(b)) => a.collides(b),
            _ => false,
        }
    }

    /// Teleports a collider.
    pub fn set_collider_position(
        &mut self,
        handle: ColliderHandle,
        position: Point<Real>,
    ) -> Result<(), WorldError> {
        let orientation = *self.collider_entry(handle)?.orientation();
        let pos = Isometry::from_parts(Translation::from(position.coords), orientation);
        self.set_collider_transform(handle, &pos)
    }

    /// Rotates a collider.
    pub fn set_collider_orientation(
        &mut self,
        handle: ColliderHandle,
        orientation: Rotation<Real>,
    ) -> Result<(), WorldError> {
        let position = *self.collider_entry(handle)?.position();
        let pos = Isometry::from_parts(Translation::from(position.coords), orientation);
        self.set_collider_transform(handle, &pos)
    }

    /// Sets the position and orientation of a collider.
    pub fn set_collider_transform(
        &mut self,
        handle: ColliderHandle,
        pos: &Isometry<Real>,
    ) -> Result<(), WorldError> {
        if self.collider_entry(handle)?.set_isometry(pos) {
            self.collider_moved(handle);
        }
        Ok(())
    }

    /// Scales a collider. Every component must be non-zero.
    pub fn set_collider_scale(
        &mut self,
        handle: ColliderHandle,
        scale: Vector<Real>,
    ) -> Result<(), WorldError> {
        if self.collider_entry(handle)?.set_scale(scale)? {
            self.mark_dirty_octree(handle);
            self.mark_requires_update(handle);
        }
        Ok(())
    }

    /// Sets the linear velocity of a collider.
    pub fn set_collider_linear_velocity(
        &mut self,
        handle: ColliderHandle,
        velocity: Vector<Real>,
    ) -> Result<(), WorldError> {
        let collider = self.collider_entry(handle)?;
        collider.set_linear_velocity(velocity);
        collider.velocity_sync_pending = collider.rigid_body().is_some();
        self.update_auto_registration(handle);
        Ok(())
    }

    /// Sets how a collider responds to the simulation.
    pub fn set_collider_response_type(
        &mut self,
        handle: ColliderHandle,
        response_type: ResponseType,
    ) -> Result<(), WorldError> {
        self.collider_entry(handle)?.set_response_type(response_type);
        self.update_auto_registration(handle);
        Ok(())
    }

    /// Sets whether a collider holds breakable constraints.
    pub fn set_collider_breakable_constraints(
        &mut self,
        handle: ColliderHandle,
        breakable: bool,
    ) -> Result<(), WorldError> {
        self.collider_entry(handle)?
            .set_breakable_constraints(breakable);
        self.update_auto_registration(handle);
        Ok(())
    }

    /// Sets the collision groups of a collider.
    pub fn set_collider_groups(
        &mut self,
        handle: ColliderHandle,
        groups: CollisionGroups,
    ) -> Result<(), WorldError> {
        self.collider_entry(handle)?.set_groups(groups);
        self.mark_requires_update(handle);
        Ok(())
    }

    /// Replaces the volumes of a collider.
    pub fn set_collider_shapes(
        &mut self,
        handle: ColliderHandle,
        shapes: impl IntoIterator<Item = ColliderShape>,
    ) -> Result<(), WorldError> {
        self.collider_entry(handle)?.set_shapes(shapes);
        self.mark_dirty_octree(handle);
        self.mark_requires_update(handle);
        Ok(())
    }

    /// Replaces the bone transforms of a collider.
    pub fn set_collider_bone_transforms(
        &mut self,
        handle: ColliderHandle,
        bones: Vec<Isometry<Real>>,
    ) -> Result<(), WorldError> {
        self.collider_entry(handle)?.set_bone_transforms(bones);
        self.mark_dirty_octree(handle);
        self.mark_requires_update(handle);
        Ok(())
    }

    /// Attaches a rigid body to a collider, or detaches it.
    pub fn set_collider_rigid_body(
        &mut self,
        handle: ColliderHandle,
        body: Option<RigidBodyHandle>,
    ) -> Result<(), WorldError> {
        let collider = self.collider_entry(handle)?;
        collider.set_rigid_body(body);
        collider.body_sync_pending = false;
        let pos = collider.isometry();

        if let Some(body) = body {
            self.solver.set_body_transform(body, &pos);
        }
        Ok(())
    }

    /// Makes `handle` ignore `other`. The two colliders then never collide.
    pub fn add_ignored_collider(
        &mut self,
        handle: ColliderHandle,
        other: ColliderHandle,
    ) -> Result<(), WorldError> {
        if self.collider_entry(handle)?.add_ignored(other) {
            self.mark_requires_update(handle);
        }
        Ok(())
    }

    /// Makes `handle` stop ignoring `other`.
    pub fn remove_ignored_collider(
        &mut self,
        handle: ColliderHandle,
        other: ColliderHandle,
    ) -> Result<(), WorldError> {
        if self.collider_entry(handle)?.remove_ignored(other) {
            self.mark_requires_update(handle);
        }
        Ok(())
    }

    /// Flags a collider as changed and registers it for the finish phase.
    pub fn mark_requires_update(&mut self, handle: ColliderHandle) {
        if let Some(collider) = self.colliders.get_mut(handle.0) {
            collider.requires_update = true;
            let _ = self.registry.register(
                RegistryList::Finish,
                handle,
                &mut collider.registration,
            );
        }
    }

    /// Registers a collider for the next bounds update.
    pub fn mark_dirty_octree(&mut self, handle: ColliderHandle) {
        let _ = self.register_collider(handle, RegistryList::OctreeUpdate);
    }

    /// Registers a collider in `list` unless it already is. Returns `true` if it was added.
    pub fn register_collider(
        &mut self,
        handle: ColliderHandle,
        list: RegistryList,
    ) -> Result<bool, WorldError> {
        let collider = self
            .colliders
            .get_mut(handle.0)
            .ok_or(WorldError::InvalidCollider(handle))?;
        Ok(self.registry.register(list, handle, &mut collider.registration))
    }

    /// Unregisters a collider from `list` if it is registered. Returns `true` if it was
    /// removed.
    pub fn unregister_collider(
        &mut self,
        handle: ColliderHandle,
        list: RegistryList,
    ) -> Result<bool, WorldError> {
        let collider = self
            .colliders
            .get_mut(handle.0)
            .ok_or(WorldError::InvalidCollider(handle))?;
        Ok(self.registry.unregister(list, handle, &mut collider.registration))
    }

    /// Appends a collider to `list`, failing if it is already registered there.
    pub fn add_to_list(
        &mut self,
        handle: ColliderHandle,
        list: RegistryList,
    ) -> Result<(), WorldError> {
        let collider = self
            .colliders
            .get_mut(handle.0)
            .ok_or(WorldError::InvalidCollider(handle))?;
        self.registry.add(list, handle, &mut collider.registration)
    }

    /// Removes a collider from `list`, failing if it is not registered there.
    pub fn remove_from_list(
        &mut self,
        handle: ColliderHandle,
        list: RegistryList,
    ) -> Result<(), WorldError> {
        let collider = self
            .colliders
            .get_mut(handle.0)
            .ok_or(WorldError::InvalidCollider(handle))?;
        self.registry.remove(list, handle, &mut collider.registration)
    }

    pub(crate) fn collider_moved(&mut self, handle: ColliderHandle) {
        if let Some(collider) = self.colliders.get_mut(handle.0) {
            if let Some(body) = collider.rigid_body() {
                if self.processing_physics {
                    collider.body_sync_pending = true;
                } else {
                    self.solver.set_body_transform(body, &collider.isometry());
                }
            }
        }

        self.mark_dirty_octree(handle);
        self.mark_requires_update(handle);
    }

    fn update_auto_registration(&mut self, handle: ColliderHandle) {
        if let Some(collider) = self.colliders.get_mut(handle.0) {
            if collider.auto_prepare() {
                let _ = self.registry.register(
                    RegistryList::Prepare,
                    handle,
                    &mut collider.registration,
                );
            }
            if collider.auto_finish() {
                let _ = self.registry.register(
                    RegistryList::Finish,
                    handle,
                    &mut collider.registration,
                );
            }
        }
    }

    /*
     * Collision tests.
     */
    /// Adds a collision test to a collider, registering it for post-physics tests.
    ///
    /// Returns the index of the test.
    pub fn add_collision_test(
        &mut self,
        handle: ColliderHandle,
        test: CollisionTest,
    ) -> Result<usize, WorldError> {
        let collider = self.collider_entry(handle)?;
        collider.tests.push(test);
        let index = collider.tests.len() - 1;
        let _ = self.register_collider(handle, RegistryList::PostPhysicsTest)?;
        Ok(index)
    }

    /// Removes a collision test. Removing the last one unregisters the collider from
    /// post-physics tests.
    pub fn remove_collision_test(
        &mut self,
        handle: ColliderHandle,
        index: usize,
    ) -> Result<CollisionTest, WorldError> {
        let collider = self.collider_entry(handle)?;

        if index >= collider.tests.len() {
            return Err(WorldError::InvalidParameter {
                name: "collision test index",
                value: index as f64,
            });
        }

        let test = collider.tests.remove(index);
        if collider.tests.is_empty() {
            let _ = self.unregister_collider(handle, RegistryList::PostPhysicsTest)?;
        }
        Ok(test)
    }

    /// The collision test `index` of a collider.
    pub fn collision_test(&self, handle: ColliderHandle, index: usize) -> Option<&CollisionTest> {
        self.collider(handle)?.tests.get(index)
    }

    /// Mutable reference to the collision test `index` of a collider.
    pub fn collision_test_mut(
        &mut self,
        handle: ColliderHandle,
        index: usize,
    ) -> Option<&mut CollisionTest> {
        self.colliders.get_mut(handle.0)?.tests.get_mut(index)
    }

    /*
     * Touch sensors.
     */
    /// Inserts a touch sensor.
    pub fn insert_touch_sensor(&mut self, sensor: TouchSensor) -> TouchSensorHandle {
        TouchSensorHandle(self.touch_sensors.insert(sensor))
    }

    /// Removes a touch sensor.
    pub fn remove_touch_sensor(
        &mut self,
        handle: TouchSensorHandle,
    ) -> Result<TouchSensor, WorldError> {
        self.touch_sensors
            .try_remove(handle.0)
            .ok_or(WorldError::InvalidTouchSensor(handle))
    }

    /// The touch sensor identified by `handle`.
    pub fn touch_sensor(&self, handle: TouchSensorHandle) -> Option<&TouchSensor> {
        self.touch_sensors.get(handle.0)
    }

    /// Mutable reference to the touch sensor identified by `handle`.
    pub fn touch_sensor_mut(&mut self, handle: TouchSensorHandle) -> Option<&mut TouchSensor> {
        self.touch_sensors.get_mut(handle.0)
    }

    /// Iterates through all the touch sensors.
    pub fn touch_sensors(&self) -> impl Iterator<Item = (TouchSensorHandle, &TouchSensor)> {
        self.touch_sensors
            .iter()
            .map(|(key, sensor)| (TouchSensorHandle(key), sensor))
    }
}
