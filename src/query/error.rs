use core::fmt;

/// Error indicating that a geometric query is not supported between two volume types.
///
/// Several pairings have no specialized routine, for example two cylinders. The low-level
/// dispatchers of the [`query`](crate::query) module report them with this marker. The
/// high-level methods of [`Volume`](crate::shape::Volume) turn it into the conservative
/// "no collision" answer.
///
/// # Example
///
/// ```
/// use coldet3d::math::{Point, Vector};
/// use coldet3d::query::{self, Unsupported};
/// use coldet3d::shape::{Cylinder, Volume};
///
/// let a = Volume::from(Cylinder::new(Point::origin(), 1.0, 0.5));
/// let b = Volume::from(Cylinder::new(Point::new(0.5, 0.0, 0.0), 1.0, 0.5));
///
/// assert_eq!(query::intersection_test(&a, &b), Err(Unsupported));
/// assert!(!a.overlaps(&b));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("query not supported between these volumes")
    }
}

impl core::error::Error for Unsupported {}
