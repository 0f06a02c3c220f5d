use crate::bridge::SolverShape;
use crate::math::{Isometry, Point, Real, Vector};

/// Identifies the part of a collision object a convex cast result refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocalShapeInfo {
    /// The sub-part index, `-1` for compound children.
    pub shape_part: i32,
    /// The triangle index, or the child index for compound children.
    pub triangle_index: i32,
}

/// A single convex cast hit, reported to a [`ConvexResultCallback`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LocalConvexResult {
    /// The identifier of the hit collision object.
    pub object_id: u64,
    /// The part of the collision object that was hit, if known.
    pub local_shape_info: Option<LocalShapeInfo>,
    /// The contact normal.
    pub hit_normal: Vector<Real>,
    /// The contact point.
    pub hit_point: Point<Real>,
    /// The fraction of the cast at which the contact happens.
    pub hit_fraction: Real,
}

/// A collision object as seen by a convex cast: a shape placed in the world.
#[derive(Copy, Clone)]
pub struct CollisionObjectWrapper<'a> {
    /// The identifier of the collision object owning the shape.
    pub object_id: u64,
    /// The shape being tested.
    pub shape: &'a dyn SolverShape,
    /// The world transform of `shape`.
    pub world_transform: Isometry<Real>,
}

impl<'a> CollisionObjectWrapper<'a> {
    /// Wraps a shape placed at `world_transform`.
    pub fn new(
        object_id: u64,
        shape: &'a dyn SolverShape,
        world_transform: Isometry<Real>,
    ) -> Self {
        Self {
            object_id,
            shape,
            world_transform,
        }
    }
}

/// Receives the results of a convex cast.
pub trait ConvexResultCallback {
    /// The smallest hit fraction accepted so far. Results beyond it are not reported.
    fn closest_hit_fraction(&self) -> Real;

    /// Should the object `object_id` be tested at all?
    fn needs_collision(&self, _object_id: u64) -> bool {
        true
    }

    /// Reports a hit. Returns the new closest hit fraction.
    fn add_single_result(&mut self, result: &mut LocalConvexResult, normal_in_world_space: bool)
        -> Real;
}

/// Forwards results to another callback, tagging them with a compound child index.
pub struct LocalInfoAdder<'a> {
    user: &'a mut dyn ConvexResultCallback,
    child: i32,
}

impl<'a> LocalInfoAdder<'a> {
    /// Tags every result forwarded to `user` with the compound child index `child`.
    pub fn new(child: i32, user: &'a mut dyn ConvexResultCallback) -> Self {
        Self { user, child }
    }
}

impl ConvexResultCallback for LocalInfoAdder<'_> {
    fn closest_hit_fraction(&self) -> Real {
        self.user.closest_hit_fraction()
    }

    fn needs_collision(&self, object_id: u64) -> bool {
        self.user.needs_collision(object_id)
    }

    fn add_single_result(
        &mut self,
        result: &mut LocalConvexResult,
        normal_in_world_space: bool,
    ) -> Real {
        if result.local_shape_info.is_none() {
            result.local_shape_info = Some(LocalShapeInfo {
                shape_part: -1,
                triangle_index: self.child,
            });
        }

        self.user.add_single_result(result, normal_in_world_space)
    }
}

/// A callback keeping only the closest result.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosestConvexResultCallback {
    /// The closest hit reported so far.
    pub closest: Option<LocalConvexResult>,
    closest_hit_fraction: Real,
}

impl Default for ClosestConvexResultCallback {
    fn default() -> Self {
        Self {
            closest: None,
            closest_hit_fraction: 1.0,
        }
    }
}

impl ClosestConvexResultCallback {
    /// A callback that has not received any hit yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Did any hit get reported?
    pub fn has_hit(&self) -> bool {
        self.closest.is_some()
    }
}

impl ConvexResultCallback for ClosestConvexResultCallback {
    fn closest_hit_fraction(&self) -> Real {
        self.closest_hit_fraction
    }

    fn add_single_result(&mut self, result: &mut LocalConvexResult, _: bool) -> Real {
        if result.hit_fraction <= self.closest_hit_fraction {
            self.closest_hit_fraction = result.hit_fraction;
            self.closest = Some(*result);
        }
        self.closest_hit_fraction
    }
}

/// The generic convex cast of the rigid-body solver, used for every pairing without a
/// specialized volume routine.
pub trait ConvexCastFallback {
    /// Casts `cast_shape` from `from` to `to` against `target`, reporting hits to `callback`.
    fn object_query_single(
        &mut self,
        cast_shape: &dyn SolverShape,
        from: &Isometry<Real>,
        to: &Isometry<Real>,
        target: &CollisionObjectWrapper,
        callback: &mut dyn ConvexResultCallback,
        allowed_penetration: Real,
    );
}

/// A fallback that never reports anything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoFallback;

impl ConvexCastFallback for NoFallback {
    fn object_query_single(
        &mut self,
        _: &dyn SolverShape,
        _: &Isometry<Real>,
        _: &Isometry<Real>,
        target: &CollisionObjectWrapper,
        _: &mut dyn ConvexResultCallback,
        _: Real,
    ) {
        log::trace!(
            "no generic convex cast available for a {:?} target",
            target.shape.shape_type()
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn local_info_adder_tags_child_index() {
        let mut user = ClosestConvexResultCallback::new();
        let mut result = LocalConvexResult {
            object_id: 7,
            local_shape_info: None,
            hit_normal: Vector::x(),
            hit_point: Point::origin(),
            hit_fraction: 0.25,
        };

        {
            let mut adder = LocalInfoAdder::new(3, &mut user);
            let closest = adder.add_single_result(&mut result, true);
            assert_eq!(closest, 0.25);
            assert_eq!(adder.closest_hit_fraction(), 0.25);
        }

        let info = user.closest.and_then(|hit| hit.local_shape_info);
        assert_eq!(
            info,
            Some(LocalShapeInfo {
                shape_part: -1,
                triangle_index: 3
            })
        );
    }
}
