use crate::ball;
use coldet3d::math::Vector;
use coldet3d::world::{
    ColliderHandle, RegistryList, ResponseType, World, WorldError, WorldListener,
};

#[test]
fn registration_is_idempotent() {
    let mut world = World::default();
    let a = world.insert_collider(ball(0.0, 0.0)).unwrap();
    world.process_physics(0.1, &mut ()).unwrap();

    assert!(world.register_collider(a, RegistryList::Finish).unwrap());
    assert!(!world.register_collider(a, RegistryList::Finish).unwrap());
    assert_eq!(world.registry().list(RegistryList::Finish).registered_count(), 1);

    assert!(world.unregister_collider(a, RegistryList::Finish).unwrap());
    assert!(!world.unregister_collider(a, RegistryList::Finish).unwrap());
    assert_eq!(world.registry().list(RegistryList::Finish).registered_count(), 0);

    assert_eq!(
        world.remove_from_list(a, RegistryList::Finish),
        Err(WorldError::NotRegistered {
            list: RegistryList::Finish,
            collider: a
        })
    );
    world.add_to_list(a, RegistryList::Finish).unwrap();
    assert_eq!(
        world.add_to_list(a, RegistryList::Finish),
        Err(WorldError::AlreadyRegistered {
            list: RegistryList::Finish,
            collider: a
        })
    );
    assert!(world.registry_is_consistent());
}

/// Unregisters `victim` from the finish list when `trigger` changes.
struct Unregisterer {
    trigger: ColliderHandle,
    victim: ColliderHandle,
    changed: Vec<ColliderHandle>,
}

impl WorldListener for Unregisterer {
    fn collider_changed(&mut self, world: &mut World, collider: ColliderHandle) {
        self.changed.push(collider);
        if collider == self.trigger {
            assert!(world.unregister_collider(self.victim, RegistryList::Finish).unwrap());
        }
    }
}

#[test]
fn unregistering_during_finish_compacts_the_list() {
    let mut world = World::default();
    let movers: Vec<_> = (0..3)
        .map(|i| {
            let collider = ball(i as f64 * 10.0, 0.0)
                .with_response_type(ResponseType::Kinematic)
                .with_linear_velocity(Vector::y());
            world.insert_collider(collider).unwrap()
        })
        .collect();

    let mut listener = Unregisterer {
        trigger: movers[0],
        victim: movers[1],
        changed: Vec::new(),
    };
    world.process_physics(0.1, &mut listener).unwrap();

    // The middle collider was tombstoned before being visited.
    assert_eq!(listener.changed, vec![movers[0], movers[2]]);

    let finish = world.registry().list(RegistryList::Finish);
    assert_eq!(finish.len(), 2);
    assert_eq!(finish.iter().collect::<Vec<_>>(), vec![movers[0], movers[2]]);
    assert!(world.registry_is_consistent());

    assert!(world.register_collider(movers[1], RegistryList::Finish).unwrap());
    let registration = world.collider(movers[1]).unwrap().registration();
    assert_eq!(registration.get(RegistryList::Finish), Some(2));
    assert!(world.registry_is_consistent());

    world.process_physics(0.1, &mut ()).unwrap();
    assert_eq!(world.registry().list(RegistryList::Finish).len(), 3);
    assert!(world.registry_is_consistent());
}

#[test]
fn removed_colliders_leave_no_dangling_slot() {
    let mut world = World::default();
    let handles: Vec<_> = (0..4)
        .map(|i| world.insert_collider(ball(i as f64 * 3.0, 0.0)).unwrap())
        .collect();

    let _ = world.remove_collider(handles[1]).unwrap();
    let _ = world.remove_collider(handles[2]).unwrap();
    assert!(world.registry_is_consistent());

    world.process_physics(0.1, &mut ()).unwrap();
    for list in RegistryList::ALL {
        assert_eq!(world.registry().list(list).tombstone_count(), 0, "{:?}", list);
    }
    assert!(world.registry_is_consistent());
}
