use crate::math::{Real, UnitVector};
use crate::world::ColliderHandle;
use alloc::vec::Vec;
use ordered_float::OrderedFloat;

/// A single hit found by a collision probe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionInfo {
    /// The collider that was hit, if the hit belongs to one.
    pub collider: Option<ColliderHandle>,
    /// The bone of the hit shape.
    pub bone: Option<usize>,
    /// The index of the hit shape in its collider.
    pub shape: Option<usize>,
    /// The index of the hit face in its shape.
    pub face: Option<usize>,
    /// The fraction of the probe displacement at which the hit happens. Zero for static
    /// probes.
    pub distance: Real,
    /// The outward normal of the hit surface.
    pub normal: Option<UnitVector<Real>>,
}

impl CollisionInfo {
    /// A hit against the shape `shape` of `collider`.
    pub fn with_collider(
        collider: ColliderHandle,
        shape: usize,
        distance: Real,
        normal: Option<UnitVector<Real>>,
    ) -> Self {
        Self {
            collider: Some(collider),
            bone: None,
            shape: Some(shape),
            face: None,
            distance,
            normal,
        }
    }

    /// Do `self` and `other` describe the same contact feature?
    #[inline]
    pub fn same_feature(&self, other: &CollisionInfo) -> bool {
        self.collider == other.collider
            && self.bone == other.bone
            && self.shape == other.shape
            && self.face == other.face
    }
}

/// Accumulates the hits of a collision probe.
///
/// Hits describing the same feature are merged, keeping the nearest one. Hits added with
/// [`CollisionResponse::add_sorted`] are kept in increasing distance order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionResponse {
    hits: Vec<CollisionInfo>,
}

impl CollisionResponse {
    /// An empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated hits.
    #[inline]
    pub fn hits(&self) -> &[CollisionInfo] {
        &self.hits
    }

    /// The number of accumulated hits.
    #[inline]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Is there no hit at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// The nearest hit of a sorted response.
    pub fn first(&self) -> Option<&CollisionInfo> {
        self.hits.first()
    }

    /// Removes every hit.
    pub fn clear(&mut self) {
        self.hits.clear();
    }

    /// Adds the hit of a ray or sweep probe, keeping the hits sorted by distance.
    pub fn add_sorted(&mut self, info: CollisionInfo) {
        if let Some(i) = self.hits.iter().position(|hit| hit.same_feature(&info)) {
            if self.hits[i].distance <= info.distance {
                return;
            }
            let _ = self.hits.remove(i);
        }

        let key = OrderedFloat(info.distance);
        let at = self
            .hits
            .iter()
            .position(|hit| OrderedFloat(hit.distance) > key)
            .unwrap_or(self.hits.len());
        self.hits.insert(at, info);
    }

    /// Adds the hit of a static probe, in insertion order.
    pub fn add_unsorted(&mut self, info: CollisionInfo) {
        match self.hits.iter_mut().find(|hit| hit.same_feature(&info)) {
            Some(hit) if info.distance < hit.distance => *hit = info,
            Some(_) => {}
            None => self.hits.push(info),
        }
    }
}
