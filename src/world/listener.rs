use crate::world::{ColliderHandle, CollisionInfo, TouchSensorHandle, World};

/// Receives the notifications of the frame pipeline.
///
/// Every notification gets mutable access to the world, so colliders may be moved, registered
/// or removed from inside a callback. Such changes are picked up by the next pass over the
/// affected list, never by the pass currently running.
pub trait WorldListener {
    /// The collider moved or changed since it was prepared.
    fn collider_changed(&mut self, _world: &mut World, _collider: ColliderHandle) {}

    /// A moving collider hit another one during custom detection.
    fn collision_response(
        &mut self,
        _world: &mut World,
        _collider: ColliderHandle,
        _info: &CollisionInfo,
    ) {
    }

    /// A collider started touching a touch sensor.
    fn collider_entered(
        &mut self,
        _world: &mut World,
        _sensor: TouchSensorHandle,
        _collider: ColliderHandle,
    ) {
    }

    /// A collider stopped touching a touch sensor.
    fn collider_left(
        &mut self,
        _world: &mut World,
        _sensor: TouchSensorHandle,
        _collider: ColliderHandle,
    ) {
    }

    /// Can the collision tests of `owner` hit `other`?
    ///
    /// Only asked once the collision groups and ignore lists allowed the hit.
    fn can_hit_collider(
        &self,
        _world: &World,
        _owner: ColliderHandle,
        _other: ColliderHandle,
    ) -> bool {
        true
    }
}

impl WorldListener for () {}
