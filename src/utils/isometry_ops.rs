use crate::math::{Isometry, Real, Vector};

/// Extra operations with isometries.
pub trait IsometryOps {
    /// Transform a vector by the absolute value of the homogeneous matrix
    /// equivalent to `self`.
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real>;

    /// Does the rotation part of `self` differ from the rotation part of `other`?
    ///
    /// The 3×3 rotation matrices are compared entry by entry, with tolerance `eps`.
    fn rotation_differs(&self, other: &Self, eps: Real) -> bool;
}

impl IsometryOps for Isometry<Real> {
    #[inline]
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation.to_rotation_matrix().into_inner().abs() * *v
    }

    #[inline]
    fn rotation_differs(&self, other: &Self, eps: Real) -> bool {
        let diff = self.rotation.to_rotation_matrix().into_inner()
            - other.rotation.to_rotation_matrix().into_inner();
        diff.iter().any(|e| e.abs() > eps)
    }
}
