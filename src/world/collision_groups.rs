#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// A bit mask identifying collision groups.
pub struct Group(u32);

bitflags::bitflags! {
    impl Group: u32 {
        /// The group n°1.
        const GROUP_1 = 1 << 0;
        /// The group n°2.
        const GROUP_2 = 1 << 1;
        /// The group n°3.
        const GROUP_3 = 1 << 2;
        /// The group n°4.
        const GROUP_4 = 1 << 3;
        /// The group n°5.
        const GROUP_5 = 1 << 4;
        /// The group n°6.
        const GROUP_6 = 1 << 5;
        /// The group n°7.
        const GROUP_7 = 1 << 6;
        /// The group n°8.
        const GROUP_8 = 1 << 7;
        /// All of the groups.
        const ALL = u32::MAX;
        /// None of the groups.
        const NONE = 0;
    }
}

impl Default for Group {
    fn default() -> Self {
        Group::ALL
    }
}

/// The collision filter of a collider or touch sensor: the groups it belongs to and the groups
/// it can collide with.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CollisionGroups {
    /// The groups this object belongs to.
    pub category: Group,
    /// The groups this object can collide with.
    pub filter: Group,
}

impl CollisionGroups {
    /// Creates collision groups from a category and a filter.
    pub const fn new(category: Group, filter: Group) -> Self {
        Self { category, filter }
    }

    /// Can an object with these groups collide with an object with the groups `other`?
    ///
    /// Each category must intersect the other filter.
    #[inline]
    pub fn test(self, other: Self) -> bool {
        self.category.intersects(other.filter) && other.category.intersects(self.filter)
    }
}
