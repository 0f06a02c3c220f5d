//! Glue between the collision volumes and the convex-cast protocol of a rigid-body solver.
//!
//! The solver describes its collision objects with [`SolverShape`] trait-objects. The
//! [`ShapeCollision`] bridge answers the casts it can with the analytic volume queries and
//! forwards the other ones to the solver's own [`ConvexCastFallback`].

pub use self::callback::{
    ClosestConvexResultCallback, CollisionObjectWrapper, ConvexCastFallback,
    ConvexResultCallback, LocalConvexResult, LocalInfoAdder, LocalShapeInfo, NoFallback,
};
pub use self::shape_collision::{
    has_transform_rotation, point_inside, point_inside_shape, volume_cast_volume,
    volume_from_shape, ShapeCollision,
};
pub use self::solver_shape::{
    BoxShape, CapsuleShape, CompoundChildEnvelope, CompoundShape, ConeShape,
    ConvexPolyhedronShape, CylinderShape, MultiSphereShape, SolverShape, SolverShapeType,
    SphereShape, UpAxis,
};

mod callback;
mod shape_collision;
mod solver_shape;
