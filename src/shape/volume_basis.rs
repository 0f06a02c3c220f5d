use crate::math::{Matrix, Point, Real, Rotation, Vector};

/// Orientation of a volume together with its cached orthonormal axes.
///
/// The axes are recomputed each time the orientation changes. Volumes with an identity
/// orientation use axis-aligned fast paths.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct VolumeBasis {
    orientation: Rotation<Real>,
    axes: Matrix<Real>,
    oriented: bool,
}

impl Default for VolumeBasis {
    fn default() -> Self {
        Self::identity()
    }
}

impl VolumeBasis {
    /// The basis of an axis-aligned volume.
    #[inline]
    pub fn identity() -> Self {
        VolumeBasis {
            orientation: Rotation::identity(),
            axes: Matrix::identity(),
            oriented: false,
        }
    }

    /// Creates the basis of a volume rotated by `orientation`.
    #[inline]
    pub fn new(orientation: Rotation<Real>) -> Self {
        let mut result = Self::identity();
        result.set_orientation(orientation);
        result
    }

    /// Sets the orientation and refreshes the cached axes.
    pub fn set_orientation(&mut self, orientation: Rotation<Real>) {
        self.orientation = orientation;
        self.oriented = orientation != Rotation::identity();
        self.axes = if self.oriented {
            orientation.to_rotation_matrix().into_inner()
        } else {
            Matrix::identity()
        };
    }

    /// The orientation of this basis.
    #[inline]
    pub fn orientation(&self) -> &Rotation<Real> {
        &self.orientation
    }

    /// Is this basis rotated away from the world axes?
    #[inline]
    pub fn is_oriented(&self) -> bool {
        self.oriented
    }

    /// The `i`-th local axis expressed in world-space.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.axes.column(i).into_owned()
    }

    /// The three local axes expressed in world-space.
    #[inline]
    pub fn axes(&self) -> [Vector<Real>; 3] {
        [self.axis(0), self.axis(1), self.axis(2)]
    }

    /// Expresses a world-space vector in this basis.
    #[inline]
    pub fn vector_to_local(&self, v: &Vector<Real>) -> Vector<Real> {
        if self.oriented {
            self.axes.tr_mul(v)
        } else {
            *v
        }
    }

    /// Expresses a vector given in this basis in world-space.
    #[inline]
    pub fn vector_to_world(&self, v: &Vector<Real>) -> Vector<Real> {
        if self.oriented {
            self.axes * v
        } else {
            *v
        }
    }

    /// Expresses the world-space point `pt` relative to `center` in this basis.
    #[inline]
    pub fn point_to_local(&self, center: &Point<Real>, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.vector_to_local(&(pt - center)))
    }

    /// Maps the local point `pt` of a volume centered at `center` to world-space.
    #[inline]
    pub fn point_to_world(&self, center: &Point<Real>, pt: &Point<Real>) -> Point<Real> {
        center + self.vector_to_world(&pt.coords)
    }
}
