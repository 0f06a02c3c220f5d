//! The six-planes view frustum volume.

use crate::math::{HomogeneousMatrix, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::VolumeError;
use na::Vector4;

/// A plane bounding a frustum.
///
/// Points `p` with `normal · p + distance >= 0` lie on the inner side of the plane.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Plane {
    /// The unit normal of the plane, pointing toward the inside of the frustum.
    pub normal: Vector<Real>,
    /// The signed offset of the plane.
    pub distance: Real,
}

impl Plane {
    /// Creates a plane, normalizing `normal` and scaling `distance` accordingly.
    ///
    /// Returns `None` if `normal` is too small to be normalized.
    pub fn new(normal: Vector<Real>, distance: Real) -> Option<Plane> {
        let norm = normal.norm();

        if norm <= DEFAULT_EPSILON {
            None
        } else {
            Some(Plane {
                normal: normal / norm,
                distance: distance / norm,
            })
        }
    }

    /// Signed distance of `pt` to this plane, positive on the inner side.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.distance
    }
}

/// Identifies one of the six planes of a [`Frustum`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    /// The left plane.
    Left = 0,
    /// The right plane.
    Right,
    /// The top plane.
    Top,
    /// The bottom plane.
    Bottom,
    /// The near plane.
    Near,
    /// The far plane.
    Far,
}

/// A convex volume bounded by six planes with inward-pointing normals.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Creates a frustum from its six planes, ordered as the variants of [`FrustumPlane`].
    pub fn new(planes: [(Vector<Real>, Real); 6]) -> Result<Frustum, VolumeError> {
        let mut result = [Plane {
            normal: Vector::zeros(),
            distance: 0.0,
        }; 6];

        for (i, (normal, distance)) in planes.iter().enumerate() {
            result[i] =
                Plane::new(*normal, *distance).ok_or(VolumeError::DegenerateFrustumPlane(i))?;
        }

        Ok(Frustum { planes: result })
    }

    /// Extracts the frustum of a view-projection matrix.
    ///
    /// The matrix maps column vectors to clip space, with a clip depth ranging from `0` to `w`.
    pub fn from_matrix(m: &HomogeneousMatrix<Real>) -> Result<Frustum, VolumeError> {
        let row = |i: usize| -> Vector4<Real> { m.row(i).transpose() };
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));
        let split = |v: Vector4<Real>| (v.xyz(), v.w);

        Self::new([
            split(r3 + r0),
            split(r3 - r0),
            split(r3 - r1),
            split(r3 + r1),
            split(r2),
            split(r3 - r2),
        ])
    }

    /// Creates a symmetric perspective frustum looking along the `+z` axis from the origin.
    pub fn perspective(
        fov_y: Real,
        aspect: Real,
        near: Real,
        far: Real,
    ) -> Result<Frustum, VolumeError> {
        let checks = [
            ("fov_y", fov_y, fov_y > 0.0 && fov_y < core::f64::consts::PI),
            ("aspect", aspect, aspect > 0.0),
            ("near", near, near > 0.0),
            ("far", far, far > near),
        ];

        if let Some((name, value, _)) = checks.iter().find(|(_, _, valid)| !*valid) {
            return Err(VolumeError::InvalidParameter {
                name: *name,
                value: *value,
            });
        }

        let ys = 1.0 / (fov_y * 0.5).tan();
        let xs = ys / aspect;
        let q = far / (far - near);

        #[rustfmt::skip]
        let projection = HomogeneousMatrix::new(
            xs,  0.0, 0.0, 0.0,
            0.0, ys,  0.0, 0.0,
            0.0, 0.0, q,   -near * q,
            0.0, 0.0, 1.0, 0.0,
        );

        Self::from_matrix(&projection)
    }

    /// The six planes of this frustum.
    #[inline]
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// One of the six planes of this frustum.
    #[inline]
    pub fn plane(&self, which: FrustumPlane) -> &Plane {
        &self.planes[which as usize]
    }

    /// Translates this frustum.
    pub fn move_by(&mut self, offset: &Vector<Real>) {
        for plane in &mut self.planes {
            plane.distance -= plane.normal.dot(offset);
        }
    }

    /// The eight corners of this frustum, near corners first.
    ///
    /// Returns `None` if the side planes do not bound a finite region.
    pub fn corners(&self) -> Option<[Point<Real>; 8]> {
        use FrustumPlane::*;

        let mut result = [Point::origin(); 8];
        let mut i = 0;

        for depth in [Near, Far] {
            for vertical in [Top, Bottom] {
                for horizontal in [Left, Right] {
                    result[i] = intersect_planes(
                        self.plane(depth),
                        self.plane(vertical),
                        self.plane(horizontal),
                    )?;
                    i += 1;
                }
            }
        }

        Some(result)
    }
}

fn intersect_planes(p1: &Plane, p2: &Plane, p3: &Plane) -> Option<Point<Real>> {
    let n23 = p2.normal.cross(&p3.normal);
    let denom = p1.normal.dot(&n23);

    if denom.abs() <= DEFAULT_EPSILON {
        return None;
    }

    let n31 = p3.normal.cross(&p1.normal);
    let n12 = p1.normal.cross(&p2.normal);
    let numerator = -(n23 * p1.distance + n31 * p2.distance + n12 * p3.distance);
    Some(Point::from(numerator / denom))
}
