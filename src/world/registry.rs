//! Self-indexing collider lists.
//!
//! Every registered collider remembers its slot in each list it belongs to, so it can be
//! removed in constant time. Removal only leaves a tombstone behind. Tombstones are swept by
//! [`SelfIndexingList::compact`], which the frame pipeline calls between passes so that slot
//! indices stay stable while a pass iterates over a list.

use crate::world::{ColliderHandle, WorldError};
use alloc::vec::Vec;
use num_derive::FromPrimitive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
/// The lists of the collider registry.
pub enum RegistryList {
    /// Colliders visited by the prepare phase.
    Prepare = 0,
    /// Colliders visited by the finish phase.
    Finish,
    /// Colliders owning collision tests to evaluate after the step.
    PostPhysicsTest,
    /// Colliders whose world bounds must be recomputed.
    OctreeUpdate,
}

impl RegistryList {
    /// Every registry list.
    pub const ALL: [RegistryList; 4] = [
        RegistryList::Prepare,
        RegistryList::Finish,
        RegistryList::PostPhysicsTest,
        RegistryList::OctreeUpdate,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// The slot a collider occupies in each registry list, if any.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryIndices([Option<usize>; 4]);

impl RegistryIndices {
    /// The slot of the collider in `list`.
    #[inline]
    pub fn get(&self, list: RegistryList) -> Option<usize> {
        self.0[list.index()]
    }

    /// Is the collider registered in `list`?
    #[inline]
    pub fn is_registered(&self, list: RegistryList) -> bool {
        self.get(list).is_some()
    }

    #[inline]
    pub(crate) fn set(&mut self, list: RegistryList, index: Option<usize>) {
        self.0[list.index()] = index;
    }
}

/// A growable list of collider slots where removal leaves a tombstone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelfIndexingList {
    slots: Vec<Option<ColliderHandle>>,
}

impl SelfIndexingList {
    /// The number of slots, tombstones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Does this list have no slot at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The collider in slot `i`, `None` for tombstones and out-of-range slots.
    #[inline]
    pub fn get(&self, i: usize) -> Option<ColliderHandle> {
        self.slots.get(i).copied().flatten()
    }

    /// The number of live entries.
    pub fn registered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// The number of tombstones.
    pub fn tombstone_count(&self) -> usize {
        self.len() - self.registered_count()
    }

    /// Iterates through the live entries, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = ColliderHandle> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    fn push(&mut self, collider: ColliderHandle) -> usize {
        self.slots.push(Some(collider));
        self.slots.len() - 1
    }

    fn tombstone(&mut self, i: usize) -> Option<ColliderHandle> {
        self.slots.get_mut(i).and_then(Option::take)
    }

    /// Removes every tombstone, reporting the new slot of each live entry to `set_index`.
    ///
    /// Returns the number of tombstones removed.
    pub(crate) fn compact(&mut self, mut set_index: impl FnMut(ColliderHandle, usize)) -> usize {
        let before = self.slots.len();
        self.slots.retain(Option::is_some);

        for (i, slot) in self.slots.iter().enumerate() {
            if let Some(collider) = slot {
                set_index(*collider, i);
            }
        }

        before - self.slots.len()
    }
}

/// The four self-indexing lists driving the frame pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColliderRegistry {
    lists: [SelfIndexingList; 4],
}

impl ColliderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The list `list`.
    #[inline]
    pub fn list(&self, list: RegistryList) -> &SelfIndexingList {
        &self.lists[list.index()]
    }

    /// The collider in slot `i` of `list`.
    #[inline]
    pub fn get(&self, list: RegistryList, i: usize) -> Option<ColliderHandle> {
        self.lists[list.index()].get(i)
    }

    /// Appends `collider` to `list`, failing if it is already registered there.
    pub fn add(
        &mut self,
        list: RegistryList,
        collider: ColliderHandle,
        indices: &mut RegistryIndices,
    ) -> Result<(), WorldError> {
        if indices.is_registered(list) {
            return Err(WorldError::AlreadyRegistered { list, collider });
        }

        let i = self.lists[list.index()].push(collider);
        indices.set(list, Some(i));
        Ok(())
    }

    /// Tombstones the slot of `collider` in `list`, failing if it is not registered there.
    pub fn remove(
        &mut self,
        list: RegistryList,
        collider: ColliderHandle,
        indices: &mut RegistryIndices,
    ) -> Result<(), WorldError> {
        let i = indices
            .get(list)
            .ok_or(WorldError::NotRegistered { list, collider })?;

        if self.lists[list.index()].tombstone(i) != Some(collider) {
            log::error!("registry slot {} of {:?} did not hold {:?}", i, list, collider);
        }

        indices.set(list, None);
        Ok(())
    }

    /// Registers `collider` in `list` unless it already is. Returns `true` if it was added.
    pub fn register(
        &mut self,
        list: RegistryList,
        collider: ColliderHandle,
        indices: &mut RegistryIndices,
    ) -> bool {
        self.add(list, collider, indices).is_ok()
    }

    /// Unregisters `collider` from `list` if it is registered. Returns `true` if it was removed.
    pub fn unregister(
        &mut self,
        list: RegistryList,
        collider: ColliderHandle,
        indices: &mut RegistryIndices,
    ) -> bool {
        self.remove(list, collider, indices).is_ok()
    }

    /// Tombstones slot `i` of `list` without touching the index stored by its collider.
    pub(crate) fn take(&mut self, list: RegistryList, i: usize) -> Option<ColliderHandle> {
        self.lists[list.index()].tombstone(i)
    }

    /// Sweeps the tombstones of `list`.
    pub(crate) fn compact(
        &mut self,
        list: RegistryList,
        set_index: impl FnMut(ColliderHandle, usize),
    ) -> usize {
        let removed = self.lists[list.index()].compact(set_index);
        if removed > 0 {
            log::trace!("compacted {:?} list: {} tombstones removed", list, removed);
        }
        removed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn register_is_idempotent() {
        let mut registry = ColliderRegistry::new();
        let mut indices = RegistryIndices::default();
        let handle = ColliderHandle(4);

        assert!(registry.register(RegistryList::Finish, handle, &mut indices));
        assert!(!registry.register(RegistryList::Finish, handle, &mut indices));
        assert_eq!(registry.list(RegistryList::Finish).registered_count(), 1);
        assert_eq!(
            registry.add(RegistryList::Finish, handle, &mut indices),
            Err(WorldError::AlreadyRegistered {
                list: RegistryList::Finish,
                collider: handle
            })
        );

        assert!(registry.unregister(RegistryList::Finish, handle, &mut indices));
        assert!(!registry.unregister(RegistryList::Finish, handle, &mut indices));
        assert_eq!(registry.list(RegistryList::Finish).registered_count(), 0);
        assert_eq!(registry.list(RegistryList::Finish).tombstone_count(), 1);
        assert!(registry
            .remove(RegistryList::Finish, handle, &mut indices)
            .is_err());
    }

    #[test]
    fn compaction_renumbers_entries() {
        let mut registry = ColliderRegistry::new();
        let mut indices = [RegistryIndices::default(); 3];

        for (i, idx) in indices.iter_mut().enumerate() {
            registry.add(RegistryList::Prepare, ColliderHandle(i), idx).unwrap();
        }
        registry
            .remove(RegistryList::Prepare, ColliderHandle(0), &mut indices[0])
            .unwrap();

        let removed = registry.compact(RegistryList::Prepare, |handle, i| {
            indices[handle.0].set(RegistryList::Prepare, Some(i))
        });

        assert_eq!(removed, 1);
        assert_eq!(indices[0].get(RegistryList::Prepare), None);
        assert_eq!(indices[1].get(RegistryList::Prepare), Some(0));
        assert_eq!(indices[2].get(RegistryList::Prepare), Some(1));
        assert_eq!(registry.get(RegistryList::Prepare, 1), Some(ColliderHandle(2)));
    }
}
