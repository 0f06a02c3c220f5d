use crate::ball;
use coldet3d::math::{Point, Vector};
use coldet3d::shape::{Sphere, Volume};
use coldet3d::world::{
    ColliderHandle, ResponseType, TouchSensor, TouchSensorHandle, World, WorldListener,
};

#[derive(Debug, PartialEq, Eq)]
enum Event {
    Entered(TouchSensorHandle, ColliderHandle),
    Left(TouchSensorHandle, ColliderHandle),
}

#[derive(Default)]
struct Events(Vec<Event>);

impl WorldListener for Events {
    fn collider_entered(&mut self, _: &mut World, sensor: TouchSensorHandle, c: ColliderHandle) {
        self.0.push(Event::Entered(sensor, c));
    }

    fn collider_left(&mut self, _: &mut World, sensor: TouchSensorHandle, c: ColliderHandle) {
        self.0.push(Event::Left(sensor, c));
    }
}

fn unit_sensor() -> TouchSensor {
    TouchSensor::new([Volume::from(Sphere::new(Point::origin(), 1.0))])
}

#[test]
fn moving_collider_enters_then_leaves() {
    let mut world = World::default();
    let sensor = world.insert_touch_sensor(unit_sensor());
    let mover = world
        .insert_collider(
            ball(-5.0, 0.0)
                .with_response_type(ResponseType::Kinematic)
                .with_linear_velocity(Vector::new(4.0, 0.0, 0.0)),
        )
        .unwrap();

    let mut events = Events::default();
    world.process_physics(1.0, &mut events).unwrap();
    assert_eq!(events.0, vec![Event::Entered(sensor, mover)]);
    assert!(world.touch_sensor(sensor).unwrap().is_touching(mover));

    events.0.clear();
    world.process_physics(0.25, &mut events).unwrap();
    assert!(events.0.is_empty());

    events.0.clear();
    world.process_physics(1.0, &mut events).unwrap();
    assert_eq!(events.0, vec![Event::Left(sensor, mover)]);
    assert!(world.touch_sensor(sensor).unwrap().touching().is_empty());
}

#[test]
fn ignored_and_untracked_colliders_are_silent() {
    let mut world = World::default();
    let inside = world.insert_collider(ball(0.5, 0.0)).unwrap();

    let mut ignoring = unit_sensor();
    ignoring.ignore_collider(inside);
    let ignoring = world.insert_touch_sensor(ignoring);

    let mut untracked = unit_sensor();
    untracked.set_track_enter_leave(false);
    let _untracked = world.insert_touch_sensor(untracked);

    let tracking = world.insert_touch_sensor(unit_sensor());

    let mut events = Events::default();
    world.process_physics(0.1, &mut events).unwrap();
    assert_eq!(events.0, vec![Event::Entered(tracking, inside)]);
    assert!(!world.touch_sensor(ignoring).unwrap().is_touching(inside));
}

#[test]
fn removed_colliders_leave_silently() {
    let mut world = World::default();
    let sensor = world.insert_touch_sensor(unit_sensor());
    let inside = world.insert_collider(ball(0.0, 0.0)).unwrap();

    let mut events = Events::default();
    world.process_physics(0.1, &mut events).unwrap();
    assert_eq!(events.0.len(), 1);

    let _ = world.remove_collider(inside).unwrap();
    assert!(world.touch_sensor(sensor).unwrap().touching().is_empty());

    events.0.clear();
    world.process_physics(0.1, &mut events).unwrap();
    assert!(events.0.is_empty());
}

#[test]
fn teleported_collider_leaves() {
    let mut world = World::default();
    let sensor = world.insert_touch_sensor(unit_sensor());
    let inside = world.insert_collider(ball(0.0, 0.0)).unwrap();

    let mut events = Events::default();
    world.process_physics(0.1, &mut events).unwrap();

    world
        .set_collider_position(inside, Point::new(0.0, 30.0, 0.0))
        .unwrap();
    events.0.clear();
    world.process_physics(0.1, &mut events).unwrap();
    assert_eq!(events.0, vec![Event::Left(sensor, inside)]);
}
