use crate::bounding_volume::Aabb;
use crate::shape::Volume;
use crate::world::{Collider, ColliderHandle, CollisionGroups};
use alloc::vec::Vec;
use slab::Slab;
use smallvec::SmallVec;

/// The handle of a touch sensor inserted into a [`World`](crate::world::World).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchSensorHandle(pub(crate) usize);

impl TouchSensorHandle {
    /// The raw index of this handle.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum TouchEvent {
    Entered(TouchSensorHandle, ColliderHandle),
    Left(TouchSensorHandle, ColliderHandle),
}

/// A set of world-space volumes reporting the colliders that start or stop touching them.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchSensor {
    volumes: Vec<Volume>,
    aabb: Aabb,
    groups: CollisionGroups,
    ignored: SmallVec<[ColliderHandle; 4]>,
    track_enter_leave: bool,
    touching: Vec<ColliderHandle>,
    leaving: Vec<ColliderHandle>,
}

impl TouchSensor {
    /// A sensor made of the world-space `volumes`, tracking enter and leave events.
    pub fn new(volumes: impl IntoIterator<Item = Volume>) -> Self {
        let mut result = Self {
            volumes: Vec::new(),
            aabb: Aabb::new_invalid(),
            groups: CollisionGroups::default(),
            ignored: SmallVec::new(),
            track_enter_leave: true,
            touching: Vec::new(),
            leaving: Vec::new(),
        };
        result.set_volumes(volumes);
        result
    }

    /// Sets the collision groups.
    pub fn with_groups(mut self, groups: CollisionGroups) -> Self {
        self.groups = groups;
        self
    }

    /// The world-space volumes of this sensor.
    pub fn volumes(&self) -> &[Volume] {
        &self.volumes
    }

    /// Replaces the volumes of this sensor.
    pub fn set_volumes(&mut self, volumes: impl IntoIterator<Item = Volume>) {
        self.volumes = volumes.into_iter().collect();
        self.aabb = Aabb::new_invalid();
        for volume in &self.volumes {
            self.aabb.merge(&volume.aabb());
        }
    }

    /// The bounds of the sensor volumes.
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The collision groups.
    pub fn groups(&self) -> CollisionGroups {
        self.groups
    }

    /// Sets the collision groups.
    pub fn set_groups(&mut self, groups: CollisionGroups) {
        self.groups = groups;
    }

    /// Makes this sensor ignore `collider`.
    pub fn ignore_collider(&mut self, collider: ColliderHandle) {
        if !self.ignores(collider) {
            self.ignored.push(collider);
        }
    }

    /// Stops ignoring `collider`.
    pub fn unignore_collider(&mut self, collider: ColliderHandle) {
        self.ignored.retain(|h| *h != collider);
    }

    /// Does this sensor ignore `collider`?
    pub fn ignores(&self, collider: ColliderHandle) -> bool {
        self.ignored.contains(&collider)
    }

    /// Are enter and leave events tracked?
    pub fn track_enter_leave(&self) -> bool {
        self.track_enter_leave
    }

    /// Enables or disables tracking. Disabling forgets the touching colliders silently.
    pub fn set_track_enter_leave(&mut self, track: bool) {
        self.track_enter_leave = track;
        if !track {
            self.touching.clear();
            self.leaving.clear();
        }
    }

    /// The colliders currently touching this sensor, in the order they entered.
    pub fn touching(&self) -> &[ColliderHandle] {
        &self.touching
    }

    /// Is `collider` touching this sensor?
    pub fn is_touching(&self, collider: ColliderHandle) -> bool {
        self.touching.contains(&collider)
    }

    /// Can this sensor detect `collider`?
    pub fn collides_with(&self, collider: &Collider) -> bool {
        self.groups.test(collider.groups()) && !collider.handle().is_some_and(|h| self.ignores(h))
    }

    /// Does a volume of `collider` overlap a volume of this sensor?
    pub fn touches(&self, collider: &Collider) -> bool {
        collider
            .world_volumes()
            .iter()
            .any(|volume| self.volumes.iter().any(|own| own.overlaps(volume)))
    }

    pub(crate) fn forget(&mut self, collider: ColliderHandle) {
        self.touching.retain(|h| *h != collider);
        self.leaving.retain(|h| *h != collider);
    }

    /// Updates the touching set, queuing an event for each collider entering or leaving.
    pub(crate) fn apply_changes(
        &mut self,
        sensor: TouchSensorHandle,
        colliders: &Slab<Collider>,
        events: &mut Vec<TouchEvent>,
    ) {
        if !self.track_enter_leave {
            return;
        }

        let candidates: SmallVec<[ColliderHandle; 8]> = colliders
            .iter()
            .filter(|(_, c)| c.world_aabb().intersects(&self.aabb) && self.collides_with(c))
            .map(|(key, _)| ColliderHandle(key))
            .collect();

        for handle in &candidates {
            let touches = colliders
                .get(handle.0)
                .is_some_and(|collider| self.touches(collider));
            let was_touching = self.is_touching(*handle);

            if touches && !was_touching {
                self.touching.push(*handle);
                events.push(TouchEvent::Entered(sensor, *handle));
            } else if !touches && was_touching {
                self.touching.retain(|h| h != handle);
                self.leaving.push(*handle);
            }
        }

        // Touching colliders that are not even candidates anymore.
        let leaving = &mut self.leaving;
        self.touching.retain(|h| {
            let keep = candidates.contains(h);
            if !keep {
                leaving.push(*h);
            }
            keep
        });

        events.extend(self.leaving.drain(..).map(|h| TouchEvent::Left(sensor, h)));
    }
}
