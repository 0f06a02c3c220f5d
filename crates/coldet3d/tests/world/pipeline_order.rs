use crate::{ball, LinearSolver};
use coldet3d::math::{Point, Real, Vector};
use coldet3d::world::{
    ColliderHandle, CollisionInfo, Phase, RegistryList, ResponseType, World, WorldConfig,
    WorldError, WorldListener,
};

/// Flags `late` as changed while `early` is being finished.
struct LateMarker {
    early: ColliderHandle,
    late: ColliderHandle,
    changed: Vec<ColliderHandle>,
}

impl WorldListener for LateMarker {
    fn collider_changed(&mut self, world: &mut World, collider: ColliderHandle) {
        self.changed.push(collider);
        if collider == self.early {
            world.mark_requires_update(self.late);
        }
    }
}

#[test]
fn finish_registrations_wait_for_next_frame() {
    let mut world = World::default();
    let early = world.insert_collider(ball(0.0, 0.0)).unwrap();
    let late = world.insert_collider(ball(5.0, 0.0)).unwrap();
    world.process_physics(0.1, &mut ()).unwrap();

    world
        .set_collider_position(early, Point::new(1.0, 0.0, 0.0))
        .unwrap();

    let mut listener = LateMarker {
        early,
        late,
        changed: Vec::new(),
    };
    world.process_physics(0.1, &mut listener).unwrap();
    assert_eq!(listener.changed, vec![early]);
    assert_eq!(
        world.collider(late).unwrap().registration().get(RegistryList::Finish),
        Some(0)
    );

    listener.changed.clear();
    world.process_physics(0.1, &mut listener).unwrap();
    assert_eq!(listener.changed, vec![late]);
    assert!(world.registry().list(RegistryList::Finish).is_empty());
}

/// Registers `late` for preparation when a collision is reported.
struct LatePreparer {
    late: ColliderHandle,
    hits: Vec<CollisionInfo>,
}

impl WorldListener for LatePreparer {
    fn collision_response(&mut self, world: &mut World, _: ColliderHandle, info: &CollisionInfo) {
        self.hits.push(*info);
        assert!(world.register_collider(self.late, RegistryList::Prepare).unwrap());
    }
}

#[test]
fn prepare_registrations_wait_for_next_frame() {
    let mut world = World::default();
    let mover = world
        .insert_collider(
            ball(0.0, 0.0)
                .with_response_type(ResponseType::Kinematic)
                .with_linear_velocity(Vector::new(10.0, 0.0, 0.0)),
        )
        .unwrap();
    let wall = world.insert_collider(ball(4.0, 0.0)).unwrap();
    let late = world.insert_collider(ball(0.0, 10.0)).unwrap();
    world.process_physics(0.0, &mut ()).unwrap();

    // Zero-length frames skip custom detection.
    assert_eq!(world.collider(mover).unwrap().position(), &Point::origin());
    assert!(!world.collider(late).unwrap().registration().is_registered(RegistryList::Prepare));

    let mut listener = LatePreparer {
        late,
        hits: Vec::new(),
    };
    world.process_physics(1.0, &mut listener).unwrap();

    assert_eq!(listener.hits.len(), 1);
    assert_eq!(listener.hits[0].collider, Some(wall));
    assert!((listener.hits[0].distance - 0.3).abs() < 1.0e-6);

    let collider = world.collider(late).unwrap();
    assert!(collider.registration().is_registered(RegistryList::Prepare));
    assert!(!collider.is_prepared());

    world.process_physics(0.0, &mut ()).unwrap();
    let collider = world.collider(late).unwrap();
    assert!(collider.is_prepared());
    assert!(!collider.registration().is_registered(RegistryList::Prepare));
    assert!(world.registry_is_consistent());
}

#[test]
fn solver_failure_releases_the_guard() {
    let mut solver = LinearSolver::default();
    solver.fail_next_step = true;
    let mut world = World::with_solver(WorldConfig::default(), solver);
    let _ = world.insert_collider(ball(0.0, 0.0)).unwrap();

    assert_eq!(
        world.process_physics(0.1, &mut ()),
        Err(WorldError::Solver("diverged".to_string()))
    );
    assert!(!world.is_processing_physics());
    assert!(world.process_physics(0.1, &mut ()).is_ok());
    assert!(world.registry_is_consistent());
}

#[test]
fn debug_context_counts_phases() {
    let config = WorldConfig {
        debug_enabled: true,
        ..WorldConfig::default()
    };
    let mut world = World::new(config);
    let _ = world.insert_collider(ball(0.0, 0.0)).unwrap();
    let _ = world.insert_collider(ball(3.0, 0.0)).unwrap();

    let elapsed: Real = 1.0 / 60.0;
    world.process_physics(elapsed, &mut ()).unwrap();
    world.process_physics(elapsed, &mut ()).unwrap();

    let debug = world.debug();
    assert_eq!(debug.frame_count(), 2);
    assert_eq!(debug.stats(Phase::Prepare).runs, 2);
    assert_eq!(debug.stats(Phase::Prepare).visited, 2);
    assert_eq!(debug.stats(Phase::Finish).visited, 2);
    assert_eq!(debug.stats(Phase::PostPhysicsTests).visited, 0);

    world.debug_mut().reset();
    assert_eq!(world.debug().frame_count(), 0);
}
