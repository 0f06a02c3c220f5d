use crate::math::{Point, Real, Vector};

/// Description of the projection of a point on a volume.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointProjection {
    /// Whether or not the point to project was inside of the volume.
    pub is_inside: bool,
    /// The projection result.
    ///
    /// Points inside of a volume project onto themselves.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }
}

/// Trait of volumes that can be tested for point inclusion and projection.
///
/// Every query is expressed in world-space.
pub trait PointQuery {
    /// Projects a point on `self`.
    ///
    /// Volumes are solid: a point inside of `self` is its own projection.
    fn project_point(&self, pt: &Point<Real>) -> PointProjection;

    /// The outward unit normal of the surface feature of `self` nearest to `pt`.
    fn normal_at_point(&self, pt: &Point<Real>) -> Vector<Real>;

    /// Tests if the given point is inside of `self`.
    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.project_point(pt).is_inside
    }

    /// The point of `self` closest to `pt`, `pt` itself when it is inside.
    #[inline]
    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.project_point(pt).point
    }

    /// Computes the distance from a point to `self`, zero when the point is inside.
    #[inline]
    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        let proj = self.project_point(pt);

        if proj.is_inside {
            0.0
        } else {
            na::distance(pt, &proj.point)
        }
    }
}
