//! Definition of the triangle volume.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::VolumeError;

/// A triangle volume.
///
/// The edges, the unit normal and the plane distance are derived from the corners and kept
/// up to date whenever the corners change.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    corners: [Point<Real>; 3],
    edges: [Vector<Real>; 3],
    normal: Vector<Real>,
    plane_distance: Real,
}

impl Triangle {
    /// Creates a triangle from three corners.
    ///
    /// The normal follows the winding `a → b → c`. Fails if the corners are collinear.
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Result<Triangle, VolumeError> {
        let mut result = Triangle {
            corners: [a, a, a],
            edges: [Vector::zeros(); 3],
            normal: Vector::zeros(),
            plane_distance: 0.0,
        };
        result.set_corners(a, b, c)?;
        Ok(result)
    }

    /// Creates a triangle from three corners and a precomputed unit normal.
    pub fn with_normal(
        a: Point<Real>,
        b: Point<Real>,
        c: Point<Real>,
        normal: Vector<Real>,
    ) -> Triangle {
        let mut result = Triangle {
            corners: [a, b, c],
            edges: [Vector::zeros(); 3],
            normal,
            plane_distance: 0.0,
        };
        result.update_derived(normal);
        result
    }

    /// Sets the corners and recomputes the normal.
    pub fn set_corners(
        &mut self,
        a: Point<Real>,
        b: Point<Real>,
        c: Point<Real>,
    ) -> Result<(), VolumeError> {
        let normal = (b - a)
            .cross(&(c - b))
            .try_normalize(DEFAULT_EPSILON)
            .ok_or(VolumeError::DegenerateTriangle)?;

        self.corners = [a, b, c];
        self.update_derived(normal);
        Ok(())
    }

    fn update_derived(&mut self, normal: Vector<Real>) {
        let [a, b, c] = self.corners;
        let unit = |v: Vector<Real>| v.try_normalize(0.0).unwrap_or_else(Vector::zeros);

        self.edges = [unit(b - a), unit(c - b), unit(a - c)];
        self.normal = normal;
        self.plane_distance = a.coords.dot(&normal);
    }

    /// The three corners of this triangle.
    #[inline]
    pub fn corners(&self) -> &[Point<Real>; 3] {
        &self.corners
    }

    /// The `i`-th corner of this triangle.
    #[inline]
    pub fn corner(&self, i: usize) -> &Point<Real> {
        &self.corners[i]
    }

    /// The unit edge directions `b - a`, `c - b` and `a - c`.
    #[inline]
    pub fn edges(&self) -> &[Vector<Real>; 3] {
        &self.edges
    }

    /// The unit normal of this triangle.
    #[inline]
    pub fn normal(&self) -> &Vector<Real> {
        &self.normal
    }

    /// The distance of the triangle plane to the origin along the normal.
    #[inline]
    pub fn plane_distance(&self) -> Real {
        self.plane_distance
    }

    /// The signed distance of `pt` to the triangle plane.
    #[inline]
    pub fn signed_distance_to_plane(&self, pt: &Point<Real>) -> Real {
        pt.coords.dot(&self.normal) - self.plane_distance
    }

    /// The barycenter of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        let sum = self.corners[0].coords + self.corners[1].coords + self.corners[2].coords;
        Point::from(sum / 3.0)
    }

    /// Translates this triangle.
    pub fn move_by(&mut self, offset: &Vector<Real>) {
        for corner in &mut self.corners {
            *corner += offset;
        }
        self.plane_distance = self.corners[0].coords.dot(&self.normal);
    }
}
