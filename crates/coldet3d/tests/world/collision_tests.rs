use crate::ball;
use coldet3d::math::{Point, Vector};
use coldet3d::shape::{Sphere, Volume};
use coldet3d::world::{
    ColliderHandle, CollisionGroups, CollisionTest, CollisionTestKind, Group, RegistryList,
    World, WorldListener,
};

/// Rejects every hit against `blocked`.
struct Filter {
    blocked: ColliderHandle,
}

impl WorldListener for Filter {
    fn can_hit_collider(&self, _: &World, _: ColliderHandle, other: ColliderHandle) -> bool {
        other != self.blocked
    }
}

#[test]
fn ray_tests_are_refreshed_after_the_step() {
    let mut world = World::default();
    let owner = world
        .insert_collider(
            ball(0.0, 0.0)
                .with_collision_test(CollisionTest::new().with_direction(Vector::x() * 10.0)),
        )
        .unwrap();
    let near = world.insert_collider(ball(3.0, 0.0)).unwrap();
    let far = world.insert_collider(ball(6.0, 0.0)).unwrap();

    world.process_physics(0.1, &mut ()).unwrap();
    let test = world.collision_test(owner, 0).unwrap();
    assert_eq!(test.kind(), CollisionTestKind::Ray);
    let hits: Vec<_> = test.collisions().iter().map(|h| h.collider).collect();
    assert_eq!(hits, vec![Some(near), Some(far)]);
    assert!((test.collisions()[0].distance - 0.25).abs() < 1.0e-9);

    world.process_physics(0.1, &mut Filter { blocked: near }).unwrap();
    let test = world.collision_test(owner, 0).unwrap();
    assert_eq!(test.collision_count(), 1);
    assert_eq!(test.collisions()[0].collider, Some(far));

    // Moving the owner drags the ray along.
    world
        .set_collider_position(owner, Point::new(0.0, 5.0, 0.0))
        .unwrap();
    world.process_physics(0.1, &mut ()).unwrap();
    assert!(!world.collision_test(owner, 0).unwrap().has_collision());
    assert_eq!(
        world.collision_test(owner, 0).unwrap().world_origin(),
        &Point::new(0.0, 5.0, 0.0)
    );
}

#[test]
fn volume_tests_overlap_and_sweep() {
    let mut world = World::default();
    let probe = Volume::from(Sphere::new(Point::origin(), 1.0));
    let owner = world.insert_collider(ball(0.0, 0.0)).unwrap();
    let target = world.insert_collider(ball(1.2, 0.0)).unwrap();
    let distant = world.insert_collider(ball(0.0, 4.0)).unwrap();

    let overlap = world
        .add_collision_test(owner, CollisionTest::new().with_volumes([probe]))
        .unwrap();
    let sweep = world
        .add_collision_test(
            owner,
            CollisionTest::new()
                .with_volumes([probe])
                .with_direction(Vector::new(0.0, 8.0, 0.0))
                .with_origin(Point::new(0.0, 0.0, 0.0)),
        )
        .unwrap();
    assert!(world
        .collider(owner)
        .unwrap()
        .registration()
        .is_registered(RegistryList::PostPhysicsTest));

    world.process_physics(0.1, &mut ()).unwrap();

    let overlap = world.collision_test(owner, overlap).unwrap();
    assert_eq!(overlap.kind(), CollisionTestKind::ColliderStatic);
    assert_eq!(overlap.collisions().len(), 1);
    assert_eq!(overlap.collisions()[0].collider, Some(target));

    let sweep = world.collision_test(owner, sweep).unwrap();
    assert_eq!(sweep.kind(), CollisionTestKind::ColliderSweep);
    let hits: Vec<_> = sweep.collisions().iter().map(|h| h.collider).collect();
    assert_eq!(hits, vec![Some(target), Some(distant)]);
    assert_eq!(sweep.collisions()[0].distance, 0.0);
    assert!((sweep.collisions()[1].distance - 2.5 / 8.0).abs() < 1.0e-6);
}

#[test]
fn groups_and_ignore_lists_filter_tests() {
    let mut world = World::default();
    let owner = world
        .insert_collider(
            ball(0.0, 0.0)
                .with_groups(CollisionGroups::new(Group::GROUP_1, Group::GROUP_2))
                .with_collision_test(CollisionTest::new().with_direction(Vector::x() * 10.0)),
        )
        .unwrap();
    let other_group = world
        .insert_collider(
            ball(2.0, 0.0).with_groups(CollisionGroups::new(Group::GROUP_3, Group::ALL)),
        )
        .unwrap();
    let ignored = world.insert_collider(ball(4.0, 0.0)).unwrap();
    let hit = world.insert_collider(ball(6.0, 0.0)).unwrap();
    world.add_ignored_collider(ignored, owner).unwrap();

    world.process_physics(0.1, &mut ()).unwrap();
    let hits: Vec<_> = world
        .collision_test(owner, 0)
        .unwrap()
        .collisions()
        .iter()
        .map(|h| h.collider)
        .collect();

    assert!(!hits.contains(&Some(other_group)));
    assert_eq!(hits, vec![Some(hit)]);
}

#[test]
fn point_tests_report_the_containing_collider() {
    let mut world = World::default();
    let owner = world.insert_collider(ball(0.0, 0.0)).unwrap();
    let container = world.insert_collider(ball(3.0, 0.0)).unwrap();
    let _ = world
        .add_collision_test(
            owner,
            CollisionTest::new().with_origin(Point::new(3.2, 0.0, 0.0)),
        )
        .unwrap();

    world.process_physics(0.1, &mut ()).unwrap();
    let test = world.collision_test(owner, 0).unwrap();
    assert_eq!(test.kind(), CollisionTestKind::Point);
    assert_eq!(test.collisions()[0].collider, Some(container));
    let normal = test.collisions()[0].normal.unwrap();
    assert!((normal.x - 1.0).abs() < 1.0e-9);

    let _ = world.remove_collision_test(owner, 0).unwrap();
    assert!(!world
        .collider(owner)
        .unwrap()
        .registration()
        .is_registered(RegistryList::PostPhysicsTest));
}
