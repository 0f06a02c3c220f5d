//! The per-frame collision detection pipeline.
//!
//! Every pass over a registry list first snapshots the length of the list and only visits the
//! slots below it. Colliders registered by a listener callback during a pass are therefore
//! visited by the same pass of the next frame. Unregistering only leaves a tombstone behind,
//! swept once the pass is over.

use crate::math::{Isometry, Real, Translation, Vector};
use crate::utils::DISPLACEMENT_EPSILON;
use crate::world::touch_sensor::TouchEvent;
use crate::world::{
    ColliderHandle, CollisionInfo, Phase, RegistryList, ResponseType, TouchSensorHandle, World,
    WorldError, WorldListener,
};
use alloc::vec::Vec;

/// Releases the frame flags of a world once the frame is over, including when a listener
/// callback unwinds out of it.
struct FrameGuard<'a>(&'a mut World);

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.0.processing_physics = false;
        self.0.in_frame = false;
        self.0.prepare_process_count = 0;
    }
}

impl World {
    /// Runs one frame of collision detection, stepping the rigid-body solver by `elapsed`
    /// seconds.
    ///
    /// The phases run in order: prepare, custom detection, prepare for step, step, update from
    /// bodies, finish, touch sensors and post-physics collision tests. Calling this from a
    /// listener callback fails with [`WorldError::AlreadyProcessing`].
    pub fn process_physics(
        &mut self,
        elapsed: Real,
        listener: &mut dyn WorldListener,
    ) -> Result<(), WorldError> {
        if self.in_frame {
            return Err(WorldError::AlreadyProcessing);
        }

        if !elapsed.is_finite() || elapsed < 0.0 {
            return Err(WorldError::InvalidParameter {
                name: "elapsed",
                value: elapsed,
            });
        }

        self.in_frame = true;
        let mut frame = FrameGuard(self);
        frame.0.debug.begin_frame();
        let result = frame.0.run_frame(elapsed, listener);
        drop(frame);

        match &result {
            Ok(()) => log::debug!("physics frame of {}s processed", elapsed),
            Err(err) => log::error!("physics frame aborted: {}", err),
        }

        result
    }

    fn run_frame(
        &mut self,
        elapsed: Real,
        listener: &mut dyn WorldListener,
    ) -> Result<(), WorldError> {
        self.processing_physics = true;
        self.prepare_detection(elapsed);

        if elapsed > self.config.min_detection_elapsed {
            self.detect_custom_collisions(listener)?;
        }

        self.prepare_for_step()?;
        self.step_simulation(elapsed)?;
        self.processing_physics = false;

        self.update_from_bodies()?;
        self.finish_detection(listener);
        self.apply_touch_sensor_changes(listener);
        self.post_physics_collision_tests(listener)
    }

    fn prepare_detection(&mut self, elapsed: Real) {
        let started = self.debug.begin();
        let count = self.registry.list(RegistryList::Prepare).len();
        self.prepare_process_count = count;
        let mut visited = 0;

        for i in 0..count {
            let Some(handle) = self.registry.get(RegistryList::Prepare, i) else {
                continue;
            };

            if let Some(collider) = self.colliders.get_mut(handle.0) {
                collider.prepare_detection(elapsed);
                visited += 1;
            }
        }

        self.debug.end(Phase::Prepare, started, visited);
    }

    fn detect_custom_collisions(
        &mut self,
        listener: &mut dyn WorldListener,
    ) -> Result<(), WorldError> {
        let started = self.debug.begin();
        let _ = self.update_octrees()?;
        let mut visited = 0;

        for i in 0..self.prepare_process_count {
            let Some(handle) = self.registry.get(RegistryList::Prepare, i) else {
                continue;
            };
            let Some(collider) = self.colliders.get(handle.0) else {
                continue;
            };

            let displacement = collider.predicted_displacement;
            if collider.response_type() != ResponseType::Kinematic
                || displacement.norm() <= DISPLACEMENT_EPSILON
            {
                continue;
            }

            visited += 1;
            let hit = self.sweep_collider(handle, &displacement);
            let toi = hit.map_or(1.0, |info| info.distance);
            let pos = Isometry::from_parts(
                Translation::from(collider.position().coords + displacement * toi),
                *collider.orientation(),
            );

            self.set_collider_transform(handle, &pos)?;

            if let Some(info) = hit {
                listener.collision_response(self, handle, &info);
            }
        }

        self.debug.end(Phase::CustomDetection, started, visited);
        Ok(())
    }

    /// The earliest hit of `handle` moving along `displacement` against the other colliders.
    fn sweep_collider(
        &self,
        handle: ColliderHandle,
        displacement: &Vector<Real>,
    ) -> Option<CollisionInfo> {
        let collider = self.colliders.get(handle.0)?;
        let swept = collider.world_aabb().swept(displacement);
        let mut best: Option<CollisionInfo> = None;

        for (other_handle, other) in self.colliders() {
            if other_handle == handle
                || !collider.collides(other)
                || !swept.intersects(other.world_aabb())
            {
                continue;
            }

            for volume in collider.world_volumes() {
                for (j, target) in other.world_volumes().iter().enumerate() {
                    let Some(hit) = volume.sweep(target, displacement) else {
                        continue;
                    };

                    if best.map_or(true, |b| hit.time_of_impact < b.distance) {
                        let mut info = CollisionInfo::with_collider(
                            other_handle,
                            j,
                            hit.time_of_impact,
                            hit.normal,
                        );
                        info.bone = other.shapes().get(j).and_then(|shape| shape.bone);
                        best = Some(info);
                    }
                }
            }
        }

        best
    }

    fn prepare_for_step(&mut self) -> Result<(), WorldError> {
        let started = self.debug.begin();
        let mut visited = self.update_octrees()?;

        for (_, collider) in self.colliders.iter_mut() {
            if !collider.velocity_sync_pending {
                continue;
            }

            collider.velocity_sync_pending = false;
            if let Some(body) = collider.rigid_body() {
                self.solver.set_body_velocity(body, collider.linear_velocity());
                visited += 1;
            }
        }

        self.debug.end(Phase::PrepareForStep, started, visited);
        Ok(())
    }

    fn step_simulation(&mut self, elapsed: Real) -> Result<(), WorldError> {
        let started = self.debug.begin();
        let sub_steps = self.solver.step_simulation(
            elapsed,
            self.config.max_sub_steps,
            self.config.sim_time_step,
        )?;
        self.debug.end(Phase::Step, started, sub_steps);
        Ok(())
    }

    fn update_from_bodies(&mut self) -> Result<(), WorldError> {
        let started = self.debug.begin();
        let mut visited = 0;

        for i in 0..self.prepare_process_count {
            let Some(handle) = self.registry.get(RegistryList::Prepare, i) else {
                continue;
            };
            let Some(collider) = self.colliders.get_mut(handle.0) else {
                continue;
            };
            let Some(body) = collider.rigid_body() else {
                continue;
            };

            visited += 1;

            // A collider moved during the step wins over its body.
            if collider.body_sync_pending {
                collider.body_sync_pending = false;
                self.solver.set_body_transform(body, &collider.isometry());
            } else if let Some(pos) = self.solver.body_transform(body) {
                if collider.set_isometry(&pos) {
                    self.mark_dirty_octree(handle);
                    self.mark_requires_update(handle);
                }
            }
        }

        // Colliders moved during the step that were not prepared this frame.
        for (_, collider) in self.colliders.iter_mut() {
            if collider.body_sync_pending {
                collider.body_sync_pending = false;
                if let Some(body) = collider.rigid_body() {
                    self.solver.set_body_transform(body, &collider.isometry());
                }
            }
        }

        // Touch sensors and collision tests need the new bounds.
        let _ = self.update_octrees()?;
        self.debug.end(Phase::UpdateFromBody, started, visited);
        Ok(())
    }

    fn finish_detection(&mut self, listener: &mut dyn WorldListener) {
        let started = self.debug.begin();

        for i in 0..self.prepare_process_count {
            let Some(handle) = self.registry.get(RegistryList::Prepare, i) else {
                continue;
            };

            if self
                .colliders
                .get(handle.0)
                .is_some_and(|collider| !collider.auto_prepare())
            {
                let _ = self.unregister_collider(handle, RegistryList::Prepare);
            }
        }

        self.compact_list(RegistryList::Prepare);
        self.prepare_process_count = 0;

        let count = self.registry.list(RegistryList::Finish).len();
        let mut visited = 0;

        for i in 0..count {
            let Some(handle) = self.registry.get(RegistryList::Finish, i) else {
                continue;
            };

            visited += 1;
            self.finish_collider(handle, listener);

            // The listener unregistered or removed the collider.
            if self.registry.get(RegistryList::Finish, i) != Some(handle) {
                continue;
            }

            let keep = self
                .colliders
                .get(handle.0)
                .is_some_and(|collider| collider.auto_finish() || collider.requires_update);

            if !keep {
                let _ = self.unregister_collider(handle, RegistryList::Finish);
            }
        }

        self.compact_list(RegistryList::Finish);
        self.debug.end(Phase::Finish, started, visited);
    }

    fn finish_collider(&mut self, handle: ColliderHandle, listener: &mut dyn WorldListener) {
        let Some(collider) = self.colliders.get_mut(handle.0) else {
            return;
        };

        let changed = core::mem::take(&mut collider.requires_update);
        collider.is_prepared = false;

        if changed {
            listener.collider_changed(self, handle);
        }
    }

    /// Recomputes the world volumes of every collider of the OctreeUpdate list, draining it.
    fn update_octrees(&mut self) -> Result<usize, WorldError> {
        let count = self.registry.list(RegistryList::OctreeUpdate).len();
        let mut visited = 0;

        for i in 0..count {
            let Some(handle) = self.registry.take(RegistryList::OctreeUpdate, i) else {
                continue;
            };

            if let Some(collider) = self.colliders.get_mut(handle.0) {
                collider.registration.set(RegistryList::OctreeUpdate, None);
                collider.update_world_volumes()?;
                visited += 1;
            }
        }

        self.compact_list(RegistryList::OctreeUpdate);
        Ok(visited)
    }

    fn apply_touch_sensor_changes(&mut self, listener: &mut dyn WorldListener) {
        let started = self.debug.begin();
        let mut events = Vec::new();

        for (key, sensor) in self.touch_sensors.iter_mut() {
            sensor.apply_changes(TouchSensorHandle(key), &self.colliders, &mut events);
        }

        let visited = self.touch_sensors.len();

        for event in events {
            match event {
                TouchEvent::Entered(sensor, collider) => {
                    listener.collider_entered(self, sensor, collider)
                }
                TouchEvent::Left(sensor, collider) => {
                    listener.collider_left(self, sensor, collider)
                }
            }
        }

        self.debug.end(Phase::TouchSensors, started, visited);
    }

    fn post_physics_collision_tests(
        &mut self,
        listener: &mut dyn WorldListener,
    ) -> Result<(), WorldError> {
        let started = self.debug.begin();
        let count = self.registry.list(RegistryList::PostPhysicsTest).len();
        let mut visited = 0;
        let mut result = Ok(());

        for i in 0..count {
            let Some(handle) = self.registry.get(RegistryList::PostPhysicsTest, i) else {
                continue;
            };
            let Some(collider) = self.colliders.get_mut(handle.0) else {
                continue;
            };

            if collider.tests.is_empty() {
                let _ = self.unregister_collider(handle, RegistryList::PostPhysicsTest);
                continue;
            }

            // The tests read the world, so they are moved out while they run.
            let mut tests = core::mem::take(&mut collider.tests);
            let updated = tests
                .iter_mut()
                .try_for_each(|test| test.update(self, handle, &*listener));
            visited += tests.len();

            if let Some(collider) = self.colliders.get_mut(handle.0) {
                collider.tests = tests;
            }

            if let Err(err) = updated {
                result = Err(err);
                break;
            }
        }

        self.compact_list(RegistryList::PostPhysicsTest);
        self.debug.end(Phase::PostPhysicsTests, started, visited);
        result
    }

    /// Sweeps the tombstones of `list`, renumbering the colliders it holds.
    pub(crate) fn compact_list(&mut self, list: RegistryList) {
        let colliders = &mut self.colliders;
        let _ = self.registry.compact(list, |handle, i| {
            if let Some(collider) = colliders.get_mut(handle.0) {
                collider.registration.set(list, Some(i));
            }
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point;
    use crate::shape::Sphere;
    use crate::world::{Collider, ColliderShape};

    #[derive(Default)]
    struct Recorder {
        changed: Vec<ColliderHandle>,
        reentrant: Option<Result<(), WorldError>>,
    }

    impl WorldListener for Recorder {
        fn collider_changed(&mut self, world: &mut World, collider: ColliderHandle) {
            self.changed.push(collider);
            self.reentrant = Some(world.process_physics(0.1, &mut ()));
        }
    }

    fn ball(x: Real) -> Collider {
        Collider::new([ColliderShape::new(Sphere::new(Point::origin(), 0.5))])
            .with_position(Point::new(x, 0.0, 0.0))
    }

    #[test]
    fn static_colliders_leave_the_lists() {
        let mut world = World::default();
        let a = world.insert_collider(ball(0.0)).unwrap();
        world.process_physics(1.0 / 60.0, &mut ()).unwrap();

        let registration = world.collider(a).unwrap().registration();
        assert!(!registration.is_registered(RegistryList::Prepare));
        assert!(!registration.is_registered(RegistryList::Finish));
        assert!(!registration.is_registered(RegistryList::OctreeUpdate));
        assert!(world.registry().list(RegistryList::Finish).is_empty());
        assert!(world.registry_is_consistent());
    }

    #[test]
    fn nested_processing_is_rejected() {
        let mut world = World::default();
        let a = world.insert_collider(ball(0.0)).unwrap();
        world.process_physics(0.1, &mut ()).unwrap();
        world.set_collider_position(a, Point::new(1.0, 0.0, 0.0)).unwrap();

        let mut recorder = Recorder::default();
        world.process_physics(0.1, &mut recorder).unwrap();

        assert_eq!(recorder.changed, vec![a]);
        assert_eq!(recorder.reentrant, Some(Err(WorldError::AlreadyProcessing)));
        assert!(!world.is_processing_physics());
        assert!(world.process_physics(0.1, &mut ()).is_ok());
    }

    struct PanickingListener;

    impl WorldListener for PanickingListener {
        fn collider_changed(&mut self, _world: &mut World, _collider: ColliderHandle) {
            panic!("listener failure");
        }
    }

    #[test]
    fn world_stays_usable_after_listener_panic() {
        let mut world = World::default();
        let a = world.insert_collider(ball(0.0)).unwrap();
        world.process_physics(0.1, &mut ()).unwrap();
        world.set_collider_position(a, Point::new(1.0, 0.0, 0.0)).unwrap();

        let unwound = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            world.process_physics(0.1, &mut PanickingListener)
        }));

        assert!(unwound.is_err());
        assert!(!world.is_processing_physics());
        assert!(world.registry_is_consistent());
        assert!(world.process_physics(0.1, &mut ()).is_ok());
    }

    #[test]
    fn invalid_elapsed_is_rejected() {
        let mut world = World::default();
        assert!(matches!(
            world.process_physics(-1.0, &mut ()),
            Err(WorldError::InvalidParameter { name: "elapsed", .. })
        ));
        assert!(world.process_physics(Real::NAN, &mut ()).is_err());
    }

    #[test]
    fn kinematic_collider_stops_at_first_hit() {
        let mut world = World::default();
        let mover = world
            .insert_collider(
                ball(0.0)
                    .with_response_type(ResponseType::Kinematic)
                    .with_linear_velocity(Vector::new(10.0, 0.0, 0.0)),
            )
            .unwrap();
        let _wall = world.insert_collider(ball(4.0)).unwrap();

        world.process_physics(1.0, &mut ()).unwrap();

        // The spheres touch once the mover travelled 3 units out of 10.
        let position = world.collider(mover).unwrap().position();
        assert_relative_eq!(position.x, 3.0, epsilon = 1.0e-6);
        assert!(world
            .collider(mover)
            .unwrap()
            .registration()
            .is_registered(RegistryList::Prepare));
    }
}
