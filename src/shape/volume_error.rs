/// Errors raised when a volume is built or updated with invalid geometric parameters.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum VolumeError {
    /// A parameter is out of its valid range.
    #[error("invalid volume parameter `{name}`: {value}")]
    InvalidParameter {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The triangle corners are collinear or coincident, so it has no normal.
    #[error("degenerate triangle: its corners do not span a plane")]
    DegenerateTriangle,
    /// A frustum plane could not be normalized.
    #[error("degenerate frustum plane at index {0}")]
    DegenerateFrustumPlane(usize),
}
