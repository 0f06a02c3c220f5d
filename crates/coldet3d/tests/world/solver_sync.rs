use crate::{ball, LinearSolver};
use approx::assert_relative_eq;
use coldet3d::math::{Isometry, Point, Real, Vector};
use coldet3d::world::{
    ColliderHandle, CollisionInfo, ResponseType, RigidBodyHandle, World, WorldConfig,
    WorldListener,
};

#[test]
fn dynamic_colliders_follow_their_bodies() {
    let mut world = World::with_solver(WorldConfig::default(), LinearSolver::with_bodies(1));
    let body = RigidBodyHandle(0);
    let handle = world
        .insert_collider(
            ball(2.0, 0.0)
                .with_response_type(ResponseType::Dynamic)
                .with_rigid_body(body),
        )
        .unwrap();

    // Inserting pushes the collider transform into its body.
    assert_eq!(
        world.solver().body_transform(body),
        Some(Isometry::translation(2.0, 0.0, 0.0))
    );

    world
        .set_collider_linear_velocity(handle, Vector::new(0.0, 4.0, 0.0))
        .unwrap();
    world.process_physics(0.5, &mut ()).unwrap();

    let collider = world.collider(handle).unwrap();
    assert_relative_eq!(*collider.position(), Point::new(2.0, 2.0, 0.0), epsilon = 1.0e-9);
    assert_relative_eq!(
        collider.world_aabb().center(),
        Point::new(2.0, 2.0, 0.0),
        epsilon = 1.0e-9
    );
}

/// Teleports `target` when a collision is reported, recording what its body saw meanwhile.
struct Teleporter {
    target: ColliderHandle,
    body: RigidBodyHandle,
    body_during_step: Option<Isometry<Real>>,
}

impl WorldListener for Teleporter {
    fn collision_response(&mut self, world: &mut World, _: ColliderHandle, _: &CollisionInfo) {
        world
            .set_collider_position(self.target, Point::new(20.0, 0.0, 0.0))
            .unwrap();
        self.body_during_step = world.solver().body_transform(self.body);
    }
}

#[test]
fn transform_write_back_waits_for_the_step() {
    let mut solver = LinearSolver::with_bodies(1);
    // The body would drift away if the solver stepped it from the teleported position.
    solver.bodies[0].1 = Vector::new(0.0, 1.0, 0.0);

    let mut world = World::with_solver(WorldConfig::default(), solver);
    let body = RigidBodyHandle(0);
    let _mover = world
        .insert_collider(
            ball(0.0, 0.0)
                .with_response_type(ResponseType::Kinematic)
                .with_linear_velocity(Vector::new(10.0, 0.0, 0.0)),
        )
        .unwrap();
    let target = world
        .insert_collider(ball(4.0, 0.0).with_rigid_body(body))
        .unwrap();

    let mut listener = Teleporter {
        target,
        body,
        body_during_step: None,
    };
    world.process_physics(1.0, &mut listener).unwrap();

    assert_eq!(
        listener.body_during_step,
        Some(Isometry::translation(4.0, 0.0, 0.0))
    );
    assert_eq!(
        world.solver().body_transform(body),
        Some(Isometry::translation(20.0, 0.0, 0.0))
    );
    assert_eq!(
        world.collider(target).unwrap().position(),
        &Point::new(20.0, 0.0, 0.0)
    );
    assert!(!world.is_processing_physics());
}
