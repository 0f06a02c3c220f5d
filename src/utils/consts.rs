use crate::math::Real;

/// Tolerance used by the volume tests for unit-scale geometry.
pub(crate) const GEOMETRY_EPSILON: Real = 1.0e-5;
/// Displacements shorter than this are treated as no motion at all.
pub(crate) const DISPLACEMENT_EPSILON: Real = 1.0e-6;
/// Ray direction components smaller than this are treated as parallel to a face.
pub(crate) const RAY_PARALLEL_EPSILON: Real = 1.0e-12;
/// Squared lengths below this are treated as degenerate.
pub(crate) const DOUBLE_SAFE_EPSILON: Real = 1.0e-9;
/// Tolerance below which a half size component is considered negative.
pub(crate) const HALF_SIZE_TOLERANCE: Real = 1.0e-6;
/// Tolerance used when comparing the bases of two transforms.
pub(crate) const FLOAT_SAFE_EPSILON: Real = f32::EPSILON as Real;
